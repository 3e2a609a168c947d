//! Prelude module for common starchart types
//!
//! `use starchart::prelude::*;` brings in everything a renderer needs to
//! resolve a style and walk its layers.

pub use crate::core::{
    constants::{MAX_SCALE, MIN_SCALE},
    ChartColors, Color, Interpolation, MapOptions, PointF, SizeF,
};

pub use crate::style::{
    DashStyle, Font, FontInfo, FontRole, FontSlot, FontStyle, GlyphLayout, HexCoordinateStyle,
    HexStyle, ImageFormat, MicroBorderStyle, Pen, ScaleContext, Style, StyleCache,
    StyleCacheConfig, StyleConfig, StyleElement, StyleKey, TextBackgroundStyle, TextStyle,
    WorldDetailLevel, WorldDetails,
};

pub use crate::highlight::{HighlightField, HighlightPattern, WorldAttributes, WorldProfile};

pub use crate::{Error, Result};

pub use std::sync::Arc;
