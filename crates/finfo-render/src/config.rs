//! Presentation configuration.

use derive_builder::Builder;

use crate::format::SizeUnits;

/// Listing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One compact line per path.
    #[default]
    Short,
    /// Aligned table with a header.
    Long,
}

/// Configuration for the presenter.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RenderConfig {
    /// Listing layout.
    #[builder(default)]
    pub mode: RenderMode,

    /// Emit color escape codes.
    #[builder(default = "false")]
    pub color: bool,

    /// Unit system for sizes.
    #[builder(default)]
    pub units: SizeUnits,

    /// Program name prefixed to error and warning lines.
    #[builder(default = "\"finfo\".to_string()")]
    pub program: String,
}

impl RenderConfig {
    /// Create a new render config builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Short,
            color: false,
            units: SizeUnits::Binary,
            program: "finfo".to_string(),
        }
    }
}
