//! Drives short or long output for a sequence of entries.

use std::io::{self, Write};

use finfo_core::{FieldWarning, FileMetadata, InspectError, PathEntry};

use crate::config::{RenderConfig, RenderMode};
use crate::format::escape_control;
use crate::long::LongTable;
use crate::palette::Palette;
use crate::short::short_line;

/// Renders entries in input order.
///
/// Short mode writes each line as soon as its entry arrives. Long mode
/// buffers rows so columns can be aligned, and writes the table in
/// [`Presenter::finish`]. Errors always go out immediately.
#[derive(Debug)]
pub struct Presenter {
    config: RenderConfig,
    palette: Palette,
    table: LongTable,
    deferred_warnings: Vec<(String, FieldWarning)>,
    rows: usize,
}

impl Presenter {
    /// Create a presenter.
    pub fn new(config: RenderConfig) -> Self {
        let palette = Palette::new(config.color);
        Self {
            config,
            palette,
            table: LongTable::new(),
            deferred_warnings: Vec::new(),
            rows: 0,
        }
    }

    /// Number of data rows emitted or buffered so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Present one extracted entry.
    pub fn entry<W: Write, E: Write>(
        &mut self,
        out: &mut W,
        err_out: &mut E,
        entry: &PathEntry,
        meta: &FileMetadata,
    ) -> io::Result<()> {
        self.rows += 1;
        match self.config.mode {
            RenderMode::Short => {
                writeln!(out, "{}", short_line(entry, meta, &self.palette, self.config.units))?;
                for warning in &meta.warnings {
                    self.write_warning(err_out, entry.input.as_str(), warning)?;
                }
            }
            RenderMode::Long => {
                self.table.push(entry, meta, self.config.units);
                let input = entry.input.to_string();
                self.deferred_warnings.extend(
                    meta.warnings
                        .iter()
                        .map(|warning| (input.clone(), warning.clone())),
                );
            }
        }
        Ok(())
    }

    /// Report an entry that could not be inspected.
    pub fn error<E: Write>(
        &self,
        err_out: &mut E,
        entry: &PathEntry,
        error: &InspectError,
    ) -> io::Result<()> {
        let input = escape_control(&entry.input);
        writeln!(err_out, "{}: {input}: {error}", self.config.program)
    }

    /// Flush buffered output. Must be called once after the last entry.
    pub fn finish<W: Write, E: Write>(&mut self, out: &mut W, err_out: &mut E) -> io::Result<()> {
        if self.config.mode == RenderMode::Long {
            tracing::debug!(rows = self.table.len(), "rendering long table");
            self.table.render(out, &self.palette)?;
            self.table = LongTable::new();
            let warnings = std::mem::take(&mut self.deferred_warnings);
            for (input, warning) in &warnings {
                self.write_warning(err_out, input, warning)?;
            }
        }
        out.flush()
    }

    fn write_warning<E: Write>(
        &self,
        err_out: &mut E,
        name: &str,
        warning: &FieldWarning,
    ) -> io::Result<()> {
        let name = escape_control(name);
        writeln!(err_out, "{}: {name}: {}", self.config.program, warning.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finfo_core::{EntryKind, EntryState, Field, FieldName, FileClass, LineCount};

    fn entry(input: &str) -> PathEntry {
        PathEntry::new(input, format!("/abs/{input}"), EntryState::Present(EntryKind::File))
    }

    fn meta() -> FileMetadata {
        let mut meta = FileMetadata::unknown(EntryKind::File);
        meta.class = FileClass::Regular;
        meta.size = Field::Known(5);
        meta.lines = Some(Field::Known(LineCount::Lines(1)));
        meta
    }

    fn presenter(mode: RenderMode) -> Presenter {
        Presenter::new(RenderConfig::builder().mode(mode).build().unwrap())
    }

    #[test]
    fn test_short_mode_streams() {
        let mut presenter = presenter(RenderMode::Short);
        let (mut out, mut err) = (Vec::new(), Vec::new());

        presenter.entry(&mut out, &mut err, &entry("a"), &meta()).unwrap();
        assert_eq!(String::from_utf8_lossy(&out).lines().count(), 1);

        presenter.entry(&mut out, &mut err, &entry("b"), &meta()).unwrap();
        presenter.finish(&mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8_lossy(&out).lines().count(), 2);
        assert_eq!(presenter.rows(), 2);
        assert!(err.is_empty());
    }

    #[test]
    fn test_long_mode_buffers_until_finish() {
        let mut presenter = presenter(RenderMode::Long);
        let (mut out, mut err) = (Vec::new(), Vec::new());

        presenter.entry(&mut out, &mut err, &entry("a"), &meta()).unwrap();
        presenter.entry(&mut out, &mut err, &entry("b"), &meta()).unwrap();
        assert!(out.is_empty());

        presenter.finish(&mut out, &mut err).unwrap();
        let output = String::from_utf8(out).unwrap();
        // Header, rule, two rows.
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_error_line() {
        let presenter = presenter(RenderMode::Short);
        let mut err = Vec::new();
        let missing = PathEntry::new("nope", "/abs/nope", EntryState::Missing);
        let error = missing.check().unwrap_err();

        presenter.error(&mut err, &missing, &error).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "finfo: nope: No such file or directory\n"
        );
        assert_eq!(presenter.rows(), 0);
    }

    #[test]
    fn test_warnings_follow_row() {
        let mut presenter = presenter(RenderMode::Short);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut meta = meta();
        meta.lines = Some(Field::Unknown);
        meta.warnings.push(FieldWarning::from_io(
            "/abs/secret",
            FieldName::LineCount,
            &std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        ));

        presenter.entry(&mut out, &mut err, &entry("secret"), &meta).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("finfo: secret: line count unavailable"));
    }

    #[test]
    fn test_long_mode_warnings_after_table() {
        let mut presenter = presenter(RenderMode::Long);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut meta = meta();
        meta.warnings.push(FieldWarning::from_io(
            "/abs/secret",
            FieldName::Entries,
            &std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        ));

        presenter.entry(&mut out, &mut err, &entry("secret"), &meta).unwrap();
        assert!(err.is_empty());

        presenter.finish(&mut out, &mut err).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("finfo: secret: entries unavailable"));
    }

    #[test]
    fn test_error_line_escapes_input() {
        let presenter = presenter(RenderMode::Short);
        let mut err = Vec::new();
        let missing = PathEntry::new("no\npe", "/abs/no\npe", EntryState::Missing);
        let error = missing.check().unwrap_err();

        presenter.error(&mut err, &missing, &error).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "finfo: no\\npe: No such file or directory\n"
        );
    }
}
