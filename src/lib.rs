//! # Starchart
//!
//! Scale-aware style resolution for multi-scale star-map tiles.
//!
//! Given a zoom scale, a bitmask of display options and a named visual
//! preset, [`StyleConfig::resolve`] computes the complete description of what
//! to draw and how: which layers are visible, their pens, colors and fonts,
//! and how much detail each world gets. The crate does no drawing itself.
//!
//! ```
//! use starchart::{MapOptions, Style, StyleConfig};
//!
//! let config = StyleConfig::resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Poster)?;
//! assert!(config.parsec_grid.visible);
//! # Ok::<(), starchart::Error>(())
//! ```

pub mod core;
pub mod highlight;
pub mod prelude;
pub mod style;

pub use crate::core::constants;
pub use crate::core::{ChartColors, Color, Interpolation, MapOptions, PointF, SizeF};
pub use highlight::{HighlightField, HighlightPattern, WorldAttributes, WorldProfile};
pub use style::{
    resolve, FontInfo, FontRole, ImageFormat, Pen, Style, StyleCache, StyleCacheConfig,
    StyleConfig, StyleElement, WorldDetailLevel, WorldDetails,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving styles or parsing user input
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid scale {0}: must be finite and greater than zero")]
    InvalidScale(f64),

    #[error("pen width must be finite and greater than zero, got {0}")]
    ZeroPenWidth(f32),

    #[error("invalid dash pattern: {0}")]
    InvalidDashPattern(String),

    #[error("unknown style: {0}")]
    UnknownStyle(String),

    #[error("invalid highlight filter: {0}")]
    InvalidHighlight(String),

    #[error("invalid UWP: {0}")]
    InvalidUwp(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
