//! File classes used for color coding.

use strum::{Display, EnumIter};

use crate::entry::EntryKind;

/// Presentation class of an entry, derived from its type and extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FileClass {
    Directory,
    Symlink,
    Executable,
    Archive,
    Image,
    Audio,
    Video,
    Document,
    Source,
    Regular,
    Other,
}

/// Lowercase extension to class.
static EXTENSION_CLASSES: &[(&str, FileClass)] = &[
    // Archives
    ("7z", FileClass::Archive),
    ("bz2", FileClass::Archive),
    ("deb", FileClass::Archive),
    ("gz", FileClass::Archive),
    ("jar", FileClass::Archive),
    ("rar", FileClass::Archive),
    ("rpm", FileClass::Archive),
    ("tar", FileClass::Archive),
    ("tgz", FileClass::Archive),
    ("xz", FileClass::Archive),
    ("zip", FileClass::Archive),
    ("zst", FileClass::Archive),
    // Images
    ("bmp", FileClass::Image),
    ("gif", FileClass::Image),
    ("ico", FileClass::Image),
    ("jpeg", FileClass::Image),
    ("jpg", FileClass::Image),
    ("png", FileClass::Image),
    ("svg", FileClass::Image),
    ("tiff", FileClass::Image),
    ("webp", FileClass::Image),
    // Audio
    ("flac", FileClass::Audio),
    ("m4a", FileClass::Audio),
    ("mp3", FileClass::Audio),
    ("ogg", FileClass::Audio),
    ("opus", FileClass::Audio),
    ("wav", FileClass::Audio),
    // Video
    ("avi", FileClass::Video),
    ("mkv", FileClass::Video),
    ("mov", FileClass::Video),
    ("mp4", FileClass::Video),
    ("webm", FileClass::Video),
    // Documents
    ("doc", FileClass::Document),
    ("docx", FileClass::Document),
    ("epub", FileClass::Document),
    ("md", FileClass::Document),
    ("odt", FileClass::Document),
    ("pdf", FileClass::Document),
    ("rst", FileClass::Document),
    ("txt", FileClass::Document),
    // Source
    ("c", FileClass::Source),
    ("cpp", FileClass::Source),
    ("go", FileClass::Source),
    ("h", FileClass::Source),
    ("java", FileClass::Source),
    ("js", FileClass::Source),
    ("py", FileClass::Source),
    ("rs", FileClass::Source),
    ("sh", FileClass::Source),
    ("toml", FileClass::Source),
    ("ts", FileClass::Source),
];

impl FileClass {
    /// Class for a file name based on its extension alone.
    pub fn from_extension(name: &str) -> Self {
        let Some((stem, ext)) = name.rsplit_once('.') else {
            return Self::Regular;
        };
        // Dotfiles like `.bashrc` have no extension.
        if stem.is_empty() {
            return Self::Regular;
        }
        let ext = ext.to_ascii_lowercase();
        EXTENSION_CLASSES
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, class)| *class)
            .unwrap_or(Self::Regular)
    }

    /// Classify an entry.
    ///
    /// Type wins over extension: a directory named `photos.zip` is a
    /// directory, and an executable `build.sh` is an executable.
    pub fn classify(kind: EntryKind, name: &str, executable: bool) -> Self {
        match kind {
            EntryKind::Directory => Self::Directory,
            EntryKind::Symlink => Self::Symlink,
            EntryKind::Other => Self::Other,
            EntryKind::File if executable => Self::Executable,
            EntryKind::File => Self::from_extension(name),
        }
    }

    /// Single-character indicator for short listings.
    pub fn indicator(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::Executable => '*',
            Self::Archive => 'a',
            Self::Image => 'i',
            Self::Audio | Self::Video => 'm',
            Self::Document => 't',
            Self::Source => 's',
            Self::Regular => '-',
            Self::Other => '?',
        }
    }
}
