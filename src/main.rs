//! finfo - inspect paths and print their metadata.
//!
//! Usage:
//!   finfo [PATH]...          One compact line per path (default)
//!   finfo -l [PATH]...       Table with owner, modification time and lines
//!   finfo --help             Show help

use std::io::{self, Write};

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use finfo_inspect::{Extractor, InspectConfig, Resolver};
use finfo_render::{
    ColorChoice, Presenter, RenderConfig, RenderMode, SizeUnits, stdout_color_capable,
};

#[derive(Parser)]
#[command(
    name = "finfo",
    version,
    about = "Print size, permissions, owner and line count of paths",
    long_about = "finfo prints metadata for each path it is given.\n\n\
                  Short mode (the default) prints one colored line per path. \
                  Long mode (-l) prints an aligned table with modification \
                  time, owner and line count. Missing paths are reported and \
                  skipped."
)]
struct Cli {
    /// Short listing, one line per path (default)
    #[arg(short = 's', long = "short", conflicts_with = "long")]
    short: bool,

    /// Long listing as a table
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// Use decimal size units (kB, MB) instead of binary (KiB, MiB)
    #[arg(long)]
    si: bool,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    /// Skip counting lines of regular files
    #[arg(long)]
    no_lines: bool,

    /// Skip counting the entries of directories
    #[arg(long)]
    no_entries: bool,

    /// Log more detail to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Paths to inspect (defaults to the current directory)
    paths: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = ColorChoice::from(cli.color).enabled(stdout_color_capable());
    let mode = if cli.long && !cli.short { RenderMode::Long } else { RenderMode::Short };
    let units = if cli.si { SizeUnits::Decimal } else { SizeUnits::Binary };

    let render = RenderConfig::builder()
        .mode(mode)
        .color(color)
        .units(units)
        .build()
        .context("Invalid render configuration")?;
    let inspect = InspectConfig::builder()
        .count_lines(!cli.no_lines)
        .count_entries(!cli.no_entries)
        .build()
        .context("Invalid inspect configuration")?;

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match run(&cli.paths, inspect, render, &mut out, &mut err) {
        Ok(rows) => {
            tracing::info!(rows, paths = cli.paths.len(), "done");
            Ok(())
        }
        // Downstream closed the pipe (e.g. `finfo | head`).
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("Failed to write output"),
    }
}

/// Inspect every path in order and render it. No paths means the current
/// directory. Returns the number of rows.
fn run<W: Write, E: Write>(
    paths: &[String],
    inspect: InspectConfig,
    render: RenderConfig,
    out: &mut W,
    err: &mut E,
) -> io::Result<usize> {
    let resolver = Resolver::new();
    let extractor = Extractor::new(inspect);
    let mut presenter = Presenter::new(render);

    for entry in resolver.resolve_all(paths) {
        match extractor.extract(&entry) {
            Ok(meta) => presenter.entry(out, err, &entry, &meta)?,
            Err(error) => {
                tracing::info!(path = %entry.input, %error, "skipping path");
                presenter.error(err, &entry, &error)?;
            }
        }
    }

    presenter.finish(out, err)?;
    Ok(presenter.rows())
}

/// Install the stderr log subscriber. Only errors are shown by default.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
