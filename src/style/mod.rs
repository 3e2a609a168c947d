pub mod cache;
pub mod details;
pub mod element;
pub mod font;
pub mod named;
pub mod resolver;

pub use cache::{StyleCache, StyleCacheConfig, StyleKey};
pub use details::{
    GlyphLayout, HexCoordinateStyle, HexStyle, ImageFormat, MicroBorderStyle, WorldDetailLevel,
    WorldDetails,
};
pub use element::{DashStyle, Pen, StyleElement, TextBackgroundStyle, TextStyle};
pub use font::{Font, FontInfo, FontRole, FontSlot, FontStyle};
pub use named::{Style, StylePatch};
pub use resolver::{resolve, ScaleContext, StyleConfig, ELEMENT_COUNT};
