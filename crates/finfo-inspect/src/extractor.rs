//! Metadata extraction for resolved entries.

use std::fs;
use std::io;
use std::path::Path;

use finfo_core::{
    EntryCounts, EntryKind, Field, FieldName, FieldWarning, FileClass, FileMetadata, InspectConfig,
    InspectError, PathEntry,
};

use crate::lines::count_file_lines;
use crate::platform;
use crate::resolver::kind_of;

/// Extracts [`FileMetadata`] from existing entries.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: InspectConfig,
}

impl Extractor {
    /// Create a new extractor.
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Extract metadata for an entry.
    ///
    /// Fails only when the entry does not exist or could not be examined.
    /// I/O errors on individual fields degrade that field to
    /// [`Field::Unknown`] and are recorded in [`FileMetadata::warnings`].
    pub fn extract(&self, entry: &PathEntry) -> Result<FileMetadata, InspectError> {
        let kind = entry.check()?;
        let path = entry.path.as_path();
        let mut warnings = Vec::new();

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                // Raced with a delete or a permission change after resolution.
                let mut meta = FileMetadata::unknown(kind);
                meta.class = FileClass::classify(kind, entry.name(), false);
                meta.warnings.push(warn(path, FieldName::Metadata, &err));
                return Ok(meta);
            }
        };

        let size = match kind {
            EntryKind::Directory => Field::Known(0),
            _ => Field::Known(metadata.len()),
        };
        let modified = degrade(&mut warnings, path, FieldName::Modified, metadata.modified());
        let executable = platform::is_executable(&metadata, entry.name());

        let lines = (kind == EntryKind::File && self.config.count_lines).then(|| {
            let result = count_file_lines(path, self.config.binary_sniff_len);
            degrade(&mut warnings, path, FieldName::LineCount, result)
        });
        let entries = (kind == EntryKind::Directory && self.config.count_entries).then(|| {
            degrade(&mut warnings, path, FieldName::Entries, count_entries(path))
        });
        let link_target = (kind == EntryKind::Symlink)
            .then(|| degrade(&mut warnings, path, FieldName::LinkTarget, fs::read_link(path)));

        tracing::debug!(path = %path.display(), %kind, warnings = warnings.len(), "extracted metadata");

        Ok(FileMetadata {
            kind,
            class: FileClass::classify(kind, entry.name(), executable),
            size,
            modified,
            permissions: platform::permissions(&metadata),
            owner: platform::owner(&metadata),
            ids: platform::owner_ids(&metadata),
            inode: platform::inode(&metadata),
            lines,
            entries,
            link_target,
            warnings,
        })
    }
}

/// Count the immediate entries of a directory without recursing.
pub fn count_entries(path: &Path) -> io::Result<EntryCounts> {
    let mut counts = EntryCounts::default();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        counts.record(kind_of(entry.file_type()?));
    }
    Ok(counts)
}

/// Turn an I/O result into a field, recording a warning on failure.
fn degrade<T>(
    warnings: &mut Vec<FieldWarning>,
    path: &Path,
    field: FieldName,
    result: io::Result<T>,
) -> Field<T> {
    match result {
        Ok(value) => Field::Known(value),
        Err(err) if err.kind() == io::ErrorKind::Unsupported => {
            tracing::debug!(path = %path.display(), %field, "field unsupported on this platform");
            Field::Unsupported
        }
        Err(err) => {
            warnings.push(warn(path, field, &err));
            Field::Unknown
        }
    }
}

fn warn(path: &Path, field: FieldName, err: &io::Error) -> FieldWarning {
    tracing::warn!(path = %path.display(), %field, %err, "field degraded to unknown");
    FieldWarning::from_io(path, field, err)
}
