//! Long mode: an aligned table with one row per path.

use std::io::{self, Write};

use finfo_core::{FileClass, FileMetadata, PathEntry};
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::format::{
    NOT_APPLICABLE, SizeUnits, escape_control, format_field, format_lines, format_link_target,
    format_meta_size, format_time,
};
use crate::palette::Palette;

/// Column headers, in order.
pub const HEADERS: [&str; 9] = [
    "Name",
    "Type",
    "Size",
    "Modified",
    "Permissions",
    "Owner",
    "Uid/Gid",
    "Inode",
    "Lines",
];

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const ALIGNS: [Align; 9] = [
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Left,
    Align::Left,
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
];

/// One table row. The name is kept apart from its link suffix so only the
/// name itself is colored.
#[derive(Debug, Clone)]
struct Row {
    name: String,
    suffix: String,
    class: FileClass,
    cells: [String; 8],
}

impl Row {
    fn name_width(&self) -> usize {
        self.name.width() + self.suffix.width()
    }
}

/// Buffered long-mode table.
#[derive(Debug, Clone, Default)]
pub struct LongTable {
    rows: Vec<Row>,
}

impl LongTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Add a row for an entry.
    pub fn push(&mut self, entry: &PathEntry, meta: &FileMetadata, units: SizeUnits) {
        let suffix = format_link_target(meta)
            .map(|target| format!(" -> {target}"))
            .unwrap_or_default();
        let lines = meta
            .lines
            .as_ref()
            .map(|lines| format_field(lines, |count| format_lines(*count)))
            .unwrap_or_else(|| NOT_APPLICABLE.to_string());

        self.rows.push(Row {
            name: escape_control(&entry.input).into_owned(),
            suffix,
            class: meta.class,
            cells: [
                meta.kind.to_string(),
                format_meta_size(meta, units),
                format_field(&meta.modified, |time| format_time(*time)),
                format_field(&meta.permissions, Clone::clone),
                format_field(&meta.owner, ToString::to_string),
                format_field(&meta.ids, ToString::to_string),
                format_field(&meta.inode, ToString::to_string),
                lines,
            ],
        });
    }

    /// Write the header, the rule line and every row.
    ///
    /// Nothing is written for an empty table.
    pub fn render<W: Write>(&self, out: &mut W, palette: &Palette) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }

        let mut widths = HEADERS.map(UnicodeWidthStr::width);
        for row in &self.rows {
            widths[0] = widths[0].max(row.name_width());
            for (width, cell) in widths[1..].iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.width());
            }
        }

        let header = HEADERS
            .iter()
            .zip(widths)
            .zip(ALIGNS)
            .map(|((text, width), align)| pad(text, width, align))
            .join(COLUMN_GAP);
        writeln!(out, "{}", header.trim_end())?;

        let rule = widths.iter().map(|width| "-".repeat(*width)).join(COLUMN_GAP);
        writeln!(out, "{rule}")?;

        for row in &self.rows {
            let name_pad = " ".repeat(widths[0] - row.name_width());
            let name = format!("{}{}{name_pad}", palette.paint(&row.name, row.class), row.suffix);
            let rest = row
                .cells
                .iter()
                .zip(&widths[1..])
                .zip(&ALIGNS[1..])
                .map(|((cell, width), align)| pad(cell, *width, *align))
                .join(COLUMN_GAP);
            let line = format!("{name}{COLUMN_GAP}{rest}");
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}
