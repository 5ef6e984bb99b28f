//! Text formatting for metadata values.

use std::borrow::Cow;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use finfo_core::{EntryCounts, EntryKind, Field, FileMetadata, LineCount};

/// Placeholder for a field that failed to read.
pub const UNKNOWN: &str = "unknown";

/// Placeholder for a field the platform cannot provide, or that does not
/// apply to the entry.
pub const NOT_APPLICABLE: &str = "-";

/// Unit system for human-readable sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnits {
    /// Powers of 1024 (KiB, MiB, ...).
    #[default]
    Binary,
    /// Powers of 1000 (kB, MB, ...).
    Decimal,
}

/// Escape control characters the way `ls -b` does, so a name stays on one
/// line and cannot carry terminal escape sequences.
pub fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Format a size in bytes.
pub fn format_size(bytes: u64, units: SizeUnits) -> String {
    match units {
        SizeUnits::Binary => humansize::format_size(bytes, humansize::BINARY),
        SizeUnits::Decimal => humansize::format_size(bytes, humansize::DECIMAL),
    }
}

/// Format a modification time in local time.
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d %H:%M").to_string()
}

/// Format a line count.
pub fn format_lines(lines: LineCount) -> String {
    match lines {
        LineCount::Lines(n) => n.to_string(),
        LineCount::Binary => "binary".to_string(),
    }
}

/// Format a directory's size as its number of entries.
pub fn format_entry_total(counts: &EntryCounts) -> String {
    match counts.total() {
        1 => "1 entry".to_string(),
        n => format!("{n} entries"),
    }
}

/// Format a field, using the placeholders for missing values.
pub fn format_field<T>(field: &Field<T>, f: impl FnOnce(&T) -> String) -> String {
    match field {
        Field::Known(value) => f(value),
        Field::Unknown => UNKNOWN.to_string(),
        Field::Unsupported => NOT_APPLICABLE.to_string(),
    }
}

/// Size column text: bytes for files, entry total for directories.
pub fn format_meta_size(meta: &FileMetadata, units: SizeUnits) -> String {
    if meta.kind == EntryKind::Directory {
        if let Some(Field::Known(counts)) = &meta.entries {
            return format_entry_total(counts);
        }
    }
    format_field(&meta.size, |bytes| format_size(*bytes, units))
}

/// Link target text for symlinks.
pub fn format_link_target(meta: &FileMetadata) -> Option<String> {
    meta.link_target
        .as_ref()
        .map(|target| {
            format_field(target, |path| {
                escape_control(&path.to_string_lossy()).into_owned()
            })
        })
}
