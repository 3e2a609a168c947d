//! User-selectable display options.
//!
//! The bit values are shared with stored and URL-encoded option strings, so
//! they must never be renumbered. Unknown bits are retained rather than
//! dropped; see [`MapOptions::from_raw`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Bitmask of display options carried by a tile request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MapOptions: u32 {
        const SECTOR_GRID = 0x0001;
        const SUBSECTOR_GRID = 0x0002;

        const SECTORS_SELECTED = 0x0004;
        const SECTORS_ALL = 0x0008;
        const SECTORS_MASK = Self::SECTORS_SELECTED.bits() | Self::SECTORS_ALL.bits();

        const BORDERS_MAJOR = 0x0010;
        const BORDERS_MINOR = 0x0020;
        const BORDERS_MASK = Self::BORDERS_MAJOR.bits() | Self::BORDERS_MINOR.bits();

        const NAMES_MAJOR = 0x0040;
        const NAMES_MINOR = 0x0080;
        const NAMES_MASK = Self::NAMES_MAJOR.bits() | Self::NAMES_MINOR.bits();

        const WORLDS_CAPITALS = 0x0100;
        const WORLDS_HOMEWORLDS = 0x0200;
        const WORLDS_MASK = Self::WORLDS_CAPITALS.bits() | Self::WORLDS_HOMEWORLDS.bits();

        const FORCE_HEXES = 0x2000;
        const WORLD_COLORS = 0x4000;
        const FILLED_BORDERS = 0x8000;
    }
}

impl MapOptions {
    /// The option set a fresh map view starts with.
    pub const DEFAULT_VIEW: MapOptions = MapOptions::SECTOR_GRID
        .union(MapOptions::SUBSECTOR_GRID)
        .union(MapOptions::SECTORS_SELECTED)
        .union(MapOptions::BORDERS_MASK)
        .union(MapOptions::NAMES_MASK)
        .union(MapOptions::WORLDS_MASK);

    /// Accept a raw value exactly as callers stored it, unknown bits included.
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    pub fn any_sector_names(&self) -> bool {
        self.intersects(Self::SECTORS_MASK)
    }

    pub fn any_borders(&self) -> bool {
        self.intersects(Self::BORDERS_MASK)
    }

    pub fn any_names(&self) -> bool {
        self.intersects(Self::NAMES_MASK)
    }

    pub fn any_world_markers(&self) -> bool {
        self.intersects(Self::WORLDS_MASK)
    }

    /// Parse `0x`-prefixed hex or plain decimal, as found in tile URLs.
    pub fn parse_raw(text: &str) -> Option<Self> {
        let text = text.trim();
        let bits = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => text.parse::<u32>().ok()?,
        };
        Some(Self::from_raw(bits))
    }
}
