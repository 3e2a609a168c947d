//! Per-world detail selection and the small enums the renderer switches on.

use crate::core::constants::*;
use crate::core::PointF;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// What to draw for each world.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct WorldDetails: u32 {
        /// World glyph reflects its type (asteroid belt, water world, ...).
        const TYPE = 1 << 0;
        /// Names of important worlds only (capitals, high population).
        const KEY_NAMES = 1 << 1;
        const STARPORT = 1 << 2;
        const GAS_GIANT = 1 << 3;
        const ALLEGIANCE = 1 << 4;
        const BASES = 1 << 5;
        const ZONE = 1 << 6;
        /// Hex number above each world.
        const HEX = 1 << 7;
        /// Every world name, not just key ones.
        const ALL_NAMES = 1 << 8;
        /// Belts drawn as scattered bodies rather than a single glyph.
        const ASTEROIDS = 1 << 9;
        /// Distinct font and color for important worlds.
        const HIGHLIGHT = 1 << 10;
        /// UWP line below the world name.
        const UWP = 1 << 11;

        const DOTMAP = 0;
        const ATLAS = Self::TYPE.bits()
            | Self::KEY_NAMES.bits()
            | Self::STARPORT.bits()
            | Self::GAS_GIANT.bits()
            | Self::ALLEGIANCE.bits()
            | Self::BASES.bits()
            | Self::ZONE.bits()
            | Self::HIGHLIGHT.bits();
        const POSTER = Self::ATLAS.bits()
            | Self::HEX.bits()
            | Self::ALL_NAMES.bits()
            | Self::ASTEROIDS.bits();
    }
}

/// Detail tier chosen purely from scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorldDetailLevel {
    /// Worlds are not drawn at all.
    None,
    Dotmap,
    Atlas,
    Poster,
}

impl WorldDetailLevel {
    pub fn for_scale(scale: f64) -> Self {
        if scale < WORLD_MIN_SCALE {
            Self::None
        } else if scale < WORLD_BASIC_MIN_SCALE {
            Self::Dotmap
        } else if scale < WORLD_FULL_MIN_SCALE {
            Self::Atlas
        } else {
            Self::Poster
        }
    }

    /// Default detail bits of the tier, before style and option masking.
    pub fn default_details(&self) -> WorldDetails {
        match self {
            Self::None | Self::Dotmap => WorldDetails::DOTMAP,
            Self::Atlas => WorldDetails::ATLAS,
            Self::Poster => WorldDetails::POSTER,
        }
    }
}

/// Outline drawn around each parsec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexStyle {
    None,
    Hex,
    Square,
}

/// How polity borders follow the parsec grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicroBorderStyle {
    Hex,
    Square,
    Curve,
}

/// Whether hex numbers count from the sector or the subsector origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexCoordinateStyle {
    Sector,
    Subsector,
}

/// Tile encoding the serving layer should prefer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    pub fn is_lossless(&self) -> bool {
        matches!(self, Self::Png)
    }
}

/// Anchor offsets of the glyphs drawn around a world, in parsecs from the
/// hex center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphLayout {
    pub starport: PointF,
    pub gas_giant: PointF,
    pub allegiance: PointF,
    pub base_top: PointF,
    pub base_middle: PointF,
    pub base_bottom: PointF,
}

impl GlyphLayout {
    pub const ATLAS: GlyphLayout = GlyphLayout {
        starport: PointF::new(0.0, -0.24),
        gas_giant: PointF::new(0.25, -0.18),
        allegiance: PointF::new(0.25, 0.18),
        base_top: PointF::new(-0.25, -0.18),
        base_middle: PointF::new(-0.35, 0.0),
        base_bottom: PointF::new(-0.25, 0.18),
    };

    pub const POSTER: GlyphLayout = GlyphLayout {
        starport: PointF::new(-0.25, -0.18),
        gas_giant: PointF::new(0.25, -0.18),
        allegiance: PointF::new(0.0, 0.3),
        base_top: PointF::new(-0.35, 0.0),
        base_middle: PointF::new(-0.35, 0.0),
        base_bottom: PointF::new(-0.25, 0.18),
    };

    /// Vertical room taken by the UWP line under the world name.
    const UWP_SHIFT: f32 = 0.1;

    pub fn for_details(details: WorldDetails) -> Self {
        let layout = if details.contains(WorldDetails::HEX) {
            Self::POSTER
        } else {
            Self::ATLAS
        };
        if details.contains(WorldDetails::UWP) {
            layout.with_uwp_line()
        } else {
            layout
        }
    }

    /// Lift the top row and push the lower glyphs clear of the UWP line.
    pub fn with_uwp_line(self) -> Self {
        let up = PointF::new(0.0, -Self::UWP_SHIFT);
        Self {
            starport: self.starport.add(&up),
            gas_giant: self.gas_giant.add(&up),
            allegiance: PointF::new(0.25, 0.18),
            base_top: self.base_top.add(&up),
            base_bottom: self.base_bottom.add(&PointF::new(0.0, Self::UWP_SHIFT)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_level_thresholds() {
        assert_eq!(WorldDetailLevel::for_scale(1.0), WorldDetailLevel::None);
        assert_eq!(WorldDetailLevel::for_scale(4.0), WorldDetailLevel::Dotmap);
        assert_eq!(WorldDetailLevel::for_scale(23.9), WorldDetailLevel::Dotmap);
        assert_eq!(WorldDetailLevel::for_scale(24.0), WorldDetailLevel::Atlas);
        assert_eq!(WorldDetailLevel::for_scale(48.0), WorldDetailLevel::Poster);
        assert_eq!(WorldDetailLevel::for_scale(512.0), WorldDetailLevel::Poster);
    }

    #[test]
    fn test_poster_is_strict_superset_of_atlas() {
        assert!(WorldDetails::POSTER.contains(WorldDetails::ATLAS));
        assert_ne!(WorldDetails::POSTER, WorldDetails::ATLAS);
        assert!(WorldDetails::DOTMAP.is_empty());
        assert!(!WorldDetails::POSTER.contains(WorldDetails::UWP));
    }

    #[test]
    fn test_layout_presets() {
        assert_eq!(GlyphLayout::for_details(WorldDetails::ATLAS), GlyphLayout::ATLAS);
        assert_eq!(GlyphLayout::for_details(WorldDetails::POSTER), GlyphLayout::POSTER);

        let shifted = GlyphLayout::for_details(WorldDetails::POSTER | WorldDetails::UWP);
        assert!(shifted.starport.y < GlyphLayout::POSTER.starport.y);
        assert!(shifted.base_bottom.y > GlyphLayout::POSTER.base_bottom.y);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert!(!ImageFormat::Jpeg.is_lossless());
    }
}
