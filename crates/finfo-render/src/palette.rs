//! Color mapping from file class to terminal color.

use std::env;
use std::ffi::OsStr;
use std::io;

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;
use finfo_core::FileClass;

/// When to emit color escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color only when stdout can show it.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorChoice {
    /// Resolve the choice against whether output can show color.
    pub fn enabled(self, capable: bool) -> bool {
        match self {
            Self::Auto => capable,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Check if a stream can show color.
///
/// It must be a terminal, `TERM` must not be `dumb`, and `NO_COLOR` must be
/// unset or empty.
pub fn color_capable(is_tty: bool, term: Option<&OsStr>, no_color: Option<&OsStr>) -> bool {
    is_tty && term.is_none_or(|term| term != "dumb") && no_color.is_none_or(OsStr::is_empty)
}

/// [`color_capable`] for this process's stdout.
pub fn stdout_color_capable() -> bool {
    color_capable(
        io::stdout().is_tty(),
        env::var_os("TERM").as_deref(),
        env::var_os("NO_COLOR").as_deref(),
    )
}

/// Class to color. Classes missing here stay uncolored.
static CLASS_COLORS: &[(FileClass, Color)] = &[
    (FileClass::Directory, Color::Green),
    (FileClass::Symlink, Color::Magenta),
    (FileClass::Executable, Color::Red),
    (FileClass::Archive, Color::DarkRed),
    (FileClass::Image, Color::Yellow),
    (FileClass::Audio, Color::Cyan),
    (FileClass::Video, Color::DarkCyan),
    (FileClass::Document, Color::White),
    (FileClass::Source, Color::DarkYellow),
    (FileClass::Regular, Color::Blue),
];

/// Applies class colors to text, or passes text through when disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Create a palette.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Palette that never colors.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Color for a class, if it has one.
    pub fn color_for(class: FileClass) -> Option<Color> {
        CLASS_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == class)
            .map(|(_, color)| *color)
    }

    /// Wrap `text` in the class color.
    pub fn paint(&self, text: &str, class: FileClass) -> String {
        match Self::color_for(class) {
            Some(color) if self.enabled => text.with(color).to_string(),
            _ => text.to_string(),
        }
    }
}
