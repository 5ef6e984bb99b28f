//! Resolved path entries.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use strum::Display;

use crate::error::InspectError;

/// Type of an existing filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link (not followed).
    Symlink,
    /// Sockets, devices, fifos.
    Other,
}

/// Outcome of probing a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    /// The path exists.
    Present(EntryKind),
    /// Nothing exists at the path.
    Missing,
    /// The path could not be examined. Keeps the OS message for reporting.
    Inaccessible {
        kind: std::io::ErrorKind,
        message: CompactString,
    },
}

impl EntryState {
    /// State for a path whose lookup failed with `err`.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::Missing,
            kind => Self::Inaccessible {
                kind,
                message: err.to_string().into(),
            },
        }
    }
}

/// A single CLI-supplied path after resolution.
#[derive(Debug, Clone)]
pub struct PathEntry {
    /// The path string exactly as supplied.
    pub input: CompactString,
    /// Absolute form of the path (symlinks not resolved).
    pub path: PathBuf,
    /// Existence and type.
    pub state: EntryState,
}

impl PathEntry {
    /// Create a new entry.
    pub fn new(input: impl Into<CompactString>, path: impl Into<PathBuf>, state: EntryState) -> Self {
        Self {
            input: input.into(),
            path: path.into(),
            state,
        }
    }

    /// Check if the path exists.
    pub fn exists(&self) -> bool {
        matches!(self.state, EntryState::Present(_))
    }

    /// Type of the entry, if it exists.
    pub fn kind(&self) -> Option<EntryKind> {
        match self.state {
            EntryState::Present(kind) => Some(kind),
            EntryState::Missing | EntryState::Inaccessible { .. } => None,
        }
    }

    /// Type of the entry, or the error to report in its place.
    pub fn check(&self) -> Result<EntryKind, InspectError> {
        match &self.state {
            EntryState::Present(kind) => Ok(*kind),
            EntryState::Missing => Err(InspectError::NotFound {
                path: self.path.clone(),
            }),
            EntryState::Inaccessible { kind, message } => Err(InspectError::io(
                &self.path,
                std::io::Error::new(*kind, message.as_str()),
            )),
        }
    }

    /// Final component of the input, or the whole input when it has none
    /// (`.`, `/`, `..`).
    pub fn name(&self) -> &str {
        Path::new(self.input.as_str())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.input.as_str())
    }
}
