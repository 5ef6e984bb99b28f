//! Inspection configuration.

use derive_builder::Builder;

/// Default number of leading bytes checked for NUL when sniffing binaries.
pub const DEFAULT_BINARY_SNIFF_LEN: usize = 8192;

/// Configuration for metadata extraction.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct InspectConfig {
    /// Count lines of regular files.
    #[builder(default = "true")]
    pub count_lines: bool,

    /// Count the immediate entries of directories.
    #[builder(default = "true")]
    pub count_entries: bool,

    /// Leading bytes inspected for NUL before a file is called binary.
    #[builder(default = "DEFAULT_BINARY_SNIFF_LEN")]
    pub binary_sniff_len: usize,
}

impl InspectConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.binary_sniff_len == Some(0) {
            return Err("Binary sniff length must be positive".to_string());
        }
        Ok(())
    }
}

impl InspectConfig {
    /// Create a new inspect config builder.
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::default()
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            count_lines: true,
            count_entries: true,
            binary_sniff_len: DEFAULT_BINARY_SNIFF_LEN,
        }
    }
}
