//! Short and long listings for finfo.
//!
//! [`Presenter`] takes entries in input order and writes either one compact
//! line per path ([`RenderMode::Short`]) or an aligned table
//! ([`RenderMode::Long`]). Colors come from a static class-to-color table in
//! [`Palette`] and are only emitted when enabled.

mod config;
pub mod format;
mod long;
mod palette;
mod presenter;
mod short;

pub use config::{RenderConfig, RenderConfigBuilder, RenderMode};
pub use format::SizeUnits;
pub use long::{HEADERS, LongTable};
pub use palette::{ColorChoice, Palette, color_capable, stdout_color_capable};
pub use presenter::Presenter;
pub use short::short_line;
