//! Extracted metadata for an existing path.

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use compact_str::CompactString;

use crate::class::FileClass;
use crate::entry::EntryKind;
use crate::error::FieldWarning;

/// A single extracted attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The value was read.
    Known(T),
    /// Reading failed; a warning was recorded.
    Unknown,
    /// The platform cannot provide this attribute.
    Unsupported,
}

impl<T> Field<T> {
    /// Get the value if known.
    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }

    /// Check if the value was read.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Map a known value, keeping the placeholder otherwise.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Known(value) => Field::Known(f(value)),
            Self::Unknown => Field::Unknown,
            Self::Unsupported => Field::Unsupported,
        }
    }
}

/// Line count of a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCount {
    /// Number of lines in a text file.
    Lines(u64),
    /// The file looks binary; lines are not applicable.
    Binary,
}

/// Counts of the immediate entries of a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryCounts {
    pub files: u64,
    pub dirs: u64,
    pub symlinks: u64,
    pub other: u64,
}

impl EntryCounts {
    /// Count one entry of the given kind.
    pub fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.files += 1,
            EntryKind::Directory => self.dirs += 1,
            EntryKind::Symlink => self.symlinks += 1,
            EntryKind::Other => self.other += 1,
        }
    }

    /// Total number of entries.
    pub fn total(&self) -> u64 {
        self.files + self.dirs + self.symlinks + self.other
    }
}

impl fmt::Display for EntryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} dirs, {} links",
            self.files, self.dirs, self.symlinks
        )?;
        if self.other > 0 {
            write!(f, ", {} other", self.other)?;
        }
        Ok(())
    }
}

/// Owning user and group.
///
/// Either name falls back to the numeric id when it has no entry in the
/// user database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub user: CompactString,
    pub group: CompactString,
}

impl Owner {
    /// Create a new owner.
    pub fn new(user: impl Into<CompactString>, group: impl Into<CompactString>) -> Self {
        Self {
            user: user.into(),
            group: group.into(),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user, self.group)
    }
}

/// Numeric user and group ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerIds {
    pub uid: u32,
    pub gid: u32,
}

impl fmt::Display for OwnerIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.uid, self.gid)
    }
}

/// Metadata extracted for one existing path.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Type of the entry.
    pub kind: EntryKind,
    /// Class used for coloring.
    pub class: FileClass,
    /// Size in bytes (0 for directories).
    pub size: Field<u64>,
    /// Last modification time.
    pub modified: Field<SystemTime>,
    /// Symbolic mode string, e.g. `-rw-r--r--`.
    pub permissions: Field<String>,
    /// Owning user and group.
    pub owner: Field<Owner>,
    /// Numeric uid and gid.
    pub ids: Field<OwnerIds>,
    /// Inode number.
    pub inode: Field<u64>,
    /// Line count (regular files only).
    pub lines: Option<Field<LineCount>>,
    /// Immediate entry counts (directories only).
    pub entries: Option<Field<EntryCounts>>,
    /// Link target (symlinks only).
    pub link_target: Option<Field<PathBuf>>,
    /// Fields that degraded to unknown.
    pub warnings: Vec<FieldWarning>,
}

impl FileMetadata {
    /// Create metadata with every field unknown.
    pub fn unknown(kind: EntryKind) -> Self {
        Self {
            kind,
            class: FileClass::Other,
            size: Field::Unknown,
            modified: Field::Unknown,
            permissions: Field::Unknown,
            owner: Field::Unknown,
            ids: Field::Unknown,
            inode: Field::Unknown,
            lines: None,
            entries: None,
            link_target: None,
            warnings: Vec::new(),
        }
    }

    /// Check if any field degraded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
