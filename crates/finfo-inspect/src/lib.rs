//! Path resolution and metadata extraction for finfo.
//!
//! # Overview
//!
//! - [`Resolver`] turns path strings into [`PathEntry`] values, classifying
//!   each as file, directory, symlink, other, or missing.
//! - [`Extractor`] reads size, modification time, permissions, owner, line
//!   count and directory entry counts for entries that exist.
//! - [`platform`] holds the OS-dependent pieces behind a single interface.
//!
//! # Example
//!
//! ```rust,no_run
//! use finfo_inspect::{Extractor, InspectConfig, Resolver};
//!
//! let resolver = Resolver::new();
//! let extractor = Extractor::new(InspectConfig::default());
//!
//! for entry in resolver.resolve_all(["Cargo.toml", "src"]) {
//!     match extractor.extract(&entry) {
//!         Ok(meta) => println!("{}: {:?}", entry.input, meta.size),
//!         Err(err) => eprintln!("{}: {err}", entry.input),
//!     }
//! }
//! ```

mod extractor;
mod lines;
pub mod platform;
mod resolver;

pub use extractor::{Extractor, count_entries};
pub use lines::{count_file_lines, count_lines};
pub use resolver::{DEFAULT_PATH, Resolver, kind_of};

// Re-export core types for convenience
pub use finfo_core::{
    EntryCounts, EntryKind, EntryState, Field, FieldName, FieldWarning, FileClass, FileMetadata,
    InspectConfig, InspectError, LineCount, Owner, OwnerIds, PathEntry,
};
