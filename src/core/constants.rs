//! Scale thresholds and engine-wide magic numbers.
//! Keeping them in a single place makes it easier to tweak when layers appear.
//!
//! Scale is a linear zoom multiplier: 1.0 is the reference zoom, one parsec
//! spans `scale` pixels.

/// Smallest scale the resolver works with; smaller positive scales are clamped.
pub const MIN_SCALE: f64 = 1.0 / 128.0;

/// Largest scale the resolver works with; larger scales are clamped.
pub const MAX_SCALE: f64 = 1024.0;

/// Below this, no sector grid is shown.
pub const SECTOR_GRID_MIN_SCALE: f64 = 1.0 / 2.0;

/// At and above this, the sector grid is fully opaque.
pub const SECTOR_GRID_FULL_SCALE: f64 = 4.0;

pub const SECTOR_NAME_MIN_SCALE: f64 = 1.0;

/// At and above this, every sector name is shown rather than only selected ones.
pub const SECTOR_NAME_ALL_SELECTED_SCALE: f64 = 4.0;

pub const SECTOR_NAME_MAX_SCALE: f64 = 16.0;

pub const PSEUDO_RANDOM_STARS_MIN_SCALE: f64 = 1.0;
pub const PSEUDO_RANDOM_STARS_MAX_SCALE: f64 = 4.0;

pub const SUBSECTOR_GRID_MIN_SCALE: f64 = 8.0;
pub const SUBSECTOR_NAME_MIN_SCALE: f64 = 24.0;
pub const SUBSECTOR_NAME_MAX_SCALE: f64 = 64.0;

/// Galaxy-wide labels only at the most distant zoom levels.
pub const MEGA_LABEL_MAX_SCALE: f64 = 1.0 / 4.0;

pub const MACRO_WORLDS_MIN_SCALE: f64 = 1.0 / 2.0;
pub const MACRO_WORLDS_MAX_SCALE: f64 = 4.0;
pub const MACRO_LABEL_MIN_SCALE: f64 = 1.0 / 2.0;
pub const MACRO_LABEL_MAX_SCALE: f64 = 4.0;
pub const MACRO_ROUTE_MIN_SCALE: f64 = 1.0 / 2.0;
pub const MACRO_ROUTE_MAX_SCALE: f64 = 4.0;
pub const MACRO_BORDER_MIN_SCALE: f64 = 1.0 / 32.0;

pub const MICRO_BORDER_MIN_SCALE: f64 = 4.0;
pub const MICRO_NAME_MIN_SCALE: f64 = 16.0;
pub const ROUTE_MIN_SCALE: f64 = 8.0;

pub const PARSEC_MIN_SCALE: f64 = 16.0;

/// Below this, hex outlines are drawn as squares unless hexes are forced.
pub const PARSEC_HEX_MIN_SCALE: f64 = 48.0;

pub const WORLD_MIN_SCALE: f64 = 4.0;
pub const WORLD_BASIC_MIN_SCALE: f64 = 24.0;
pub const WORLD_FULL_MIN_SCALE: f64 = 48.0;
pub const WORLD_UWP_MIN_SCALE: f64 = 96.0;

pub const T5_ALLEGIANCE_CODE_MIN_SCALE: f64 = 64.0;

pub const CANDY_MIN_WORLD_NAME_SCALE: f64 = 64.0;
pub const CANDY_MIN_UWP_SCALE: f64 = 256.0;
pub const CANDY_MAX_WORLD_RELATIVE_SCALE: f64 = 512.0;
pub const CANDY_MAX_BORDER_RELATIVE_SCALE: f64 = 32.0;
pub const CANDY_MAX_ROUTE_RELATIVE_SCALE: f64 = 32.0;

/// Pens stop growing in world units past this scale (see `pen_scale`).
pub const PEN_CAP_SCALE: f64 = 64.0;

/// Rift overlay fades in between these scales.
pub const RIFT_FADE_MIN_SCALE: f64 = 1.0 / 4.0;
pub const RIFT_FADE_MAX_SCALE: f64 = 4.0;
pub const RIFT_MAX_OPACITY: f32 = 0.85;

/// Deep-background imagery fades out between these scales.
pub const DEEP_BACKGROUND_FADE_MIN_SCALE: f64 = 1.0 / 8.0;
pub const DEEP_BACKGROUND_FADE_MAX_SCALE: f64 = 2.0;
