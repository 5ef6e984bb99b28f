//! Error and warning types for inspection.

use std::path::{Path, PathBuf};

use strum::Display;
use thiserror::Error;

/// Errors that keep a path from being inspected at all.
///
/// These are reported inline for the affected path; the run goes on with
/// the remaining paths.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Path does not exist.
    #[error("No such file or directory")]
    NotFound { path: PathBuf },

    /// Path exists but could not be examined.
    #[error("Permission denied")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InspectError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => {
                path.as_path()
            }
        }
    }
}

/// Metadata field a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FieldName {
    Metadata,
    Size,
    Modified,
    Permissions,
    Owner,
    #[strum(serialize = "line count")]
    LineCount,
    Entries,
    #[strum(serialize = "link target")]
    LinkTarget,
}

/// Non-fatal warning: one field of an existing path could not be read.
#[derive(Debug, Clone)]
pub struct FieldWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Field that degraded to unknown.
    pub field: FieldName,
    /// Human-readable message.
    pub message: String,
}

impl FieldWarning {
    /// Build a warning from the I/O error that degraded `field`.
    pub fn from_io(path: impl Into<PathBuf>, field: FieldName, error: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            field,
            message: format!("{field} unavailable: {error}"),
        }
    }
}
