//! Short mode: one compact line per path.

use finfo_core::{EntryKind, Field, FileMetadata, LineCount, PathEntry};

use crate::format::{SizeUnits, escape_control, format_field, format_link_target, format_meta_size};
use crate::palette::Palette;

/// Render the short line for one entry (no trailing newline).
///
/// Layout: `<indicator> <permissions> <size>  <name><detail>`.
pub fn short_line(
    entry: &PathEntry,
    meta: &FileMetadata,
    palette: &Palette,
    units: SizeUnits,
) -> String {
    let indicator = palette.paint(&meta.class.indicator().to_string(), meta.class);
    let permissions = format_field(&meta.permissions, Clone::clone);
    let size = format_meta_size(meta, units);
    let name = palette.paint(&escape_control(entry.name()), meta.class);

    format!(
        "{indicator} {permissions:<10} {size:>11}  {name}{}",
        detail(meta)
    )
}

fn detail(meta: &FileMetadata) -> String {
    match meta.kind {
        EntryKind::File => match &meta.lines {
            Some(Field::Known(LineCount::Lines(1))) => " (1 line)".to_string(),
            Some(Field::Known(LineCount::Lines(n))) => format!(" ({n} lines)"),
            Some(Field::Known(LineCount::Binary)) => " (binary)".to_string(),
            Some(Field::Unknown) => " (lines unknown)".to_string(),
            Some(Field::Unsupported) | None => String::new(),
        },
        EntryKind::Directory => match &meta.entries {
            Some(Field::Known(counts)) => format!(" ({counts})"),
            Some(Field::Unknown) => " (entries unknown)".to_string(),
            Some(Field::Unsupported) | None => String::new(),
        },
        EntryKind::Symlink => format_link_target(meta)
            .map(|target| format!(" -> {target}"))
            .unwrap_or_default(),
        EntryKind::Other => String::new(),
    }
}
