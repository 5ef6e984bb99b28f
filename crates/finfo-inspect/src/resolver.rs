//! Turns CLI path strings into resolved [`PathEntry`] values.

use std::fs::FileType;
use std::path::{Path, PathBuf};

use finfo_core::{EntryKind, EntryState, PathEntry};

/// Path used when no paths are given.
pub const DEFAULT_PATH: &str = ".";

/// Resolves path strings without following a final symlink.
#[derive(Debug, Default, Clone, Copy)]
pub struct Resolver;

impl Resolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a single path string.
    pub fn resolve(&self, input: &str) -> PathEntry {
        let path = absolute(Path::new(input));
        let state = match std::fs::symlink_metadata(&path) {
            Ok(metadata) => EntryState::Present(kind_of(metadata.file_type())),
            Err(err) => EntryState::from_io(&err),
        };
        tracing::debug!(input, path = %path.display(), ?state, "resolved path");
        PathEntry::new(input, path, state)
    }

    /// Resolve every input in order; no inputs means the current directory.
    pub fn resolve_all<I, S>(&self, inputs: I) -> Vec<PathEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<PathEntry> = inputs
            .into_iter()
            .map(|input| self.resolve(input.as_ref()))
            .collect();
        if entries.is_empty() {
            entries.push(self.resolve(DEFAULT_PATH));
        }
        entries
    }
}

/// Classify a file type as returned by `symlink_metadata`.
pub fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Absolute form of `path`; falls back to the path as given if the
/// current directory cannot be read.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|err| {
        tracing::debug!(path = %path.display(), %err, "could not make path absolute");
        path.to_path_buf()
    })
}
