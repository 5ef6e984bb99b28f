//! Core types for finfo.
//!
//! This crate provides the data model shared by the resolver, the
//! extractor and the presenter: resolved path entries, extracted
//! metadata, file classes and the inspection configuration.

mod class;
mod config;
mod entry;
mod error;
mod metadata;

pub use class::FileClass;
pub use config::{DEFAULT_BINARY_SNIFF_LEN, InspectConfig, InspectConfigBuilder};
pub use entry::{EntryKind, EntryState, PathEntry};
pub use error::{FieldName, FieldWarning, InspectError};
pub use metadata::{EntryCounts, Field, FileMetadata, LineCount, Owner, OwnerIds};
