//! Font descriptors and the per-element font handle cache.
//!
//! A [`FontInfo`] is the lightweight descriptor a style carries. The renderer
//! asks an element for its [`Font`] handle, which is materialized on first
//! access and reused afterwards.

use bitflags::bitflags;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Logical font family. Concrete family names are picked at the rendering
/// boundary from [`FontRole::families`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    Sans,
    /// Heavy display face for large labels.
    SansBold,
    Serif,
    Monospace,
    Handwriting,
    /// Glyph face for stars, suns and other marker symbols.
    Symbol,
}

impl FontRole {
    /// Candidate families in order of preference; the last entry is a generic
    /// CSS family every backend understands.
    pub fn families(&self) -> &'static [&'static str] {
        match self {
            Self::Sans => &["Arial", "Helvetica", "Liberation Sans", "sans-serif"],
            Self::SansBold => &["Arial Black", "Arial", "Helvetica", "sans-serif"],
            Self::Serif => &["Optima", "Palatino", "Georgia", "serif"],
            Self::Monospace => &["Courier New", "Consolas", "DejaVu Sans Mono", "monospace"],
            Self::Handwriting => &["Comic Sans MS", "Chalkboard", "cursive"],
            Self::Symbol => &["Segoe UI Symbol", "DejaVu Sans", "Arial Unicode MS", "sans-serif"],
        }
    }

    /// First family accepted by `is_available`, falling back to the generic family.
    pub fn resolve_family(&self, is_available: impl Fn(&str) -> bool) -> &'static str {
        let families = self.families();
        families
            .iter()
            .copied()
            .find(|family| is_available(family))
            .unwrap_or(families[families.len() - 1])
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle::empty();
}

/// Font descriptor; `size` is in parsecs (hex widths), not points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    pub role: FontRole,
    pub size: f32,
    pub style: FontStyle,
}

impl FontInfo {
    pub const fn new(role: FontRole, size: f32, style: FontStyle) -> Self {
        Self { role, size, style }
    }

    pub const fn regular(role: FontRole, size: f32) -> Self {
        Self::new(role, size, FontStyle::REGULAR)
    }

    pub fn with_role(self, role: FontRole) -> Self {
        Self { role, ..self }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            size: self.size * factor,
            ..self
        }
    }
}

/// Materialized font handle handed to the drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub fallbacks: &'static [&'static str],
    pub em_size: f32,
    pub style: FontStyle,
}

impl Font {
    pub fn from_info(info: &FontInfo) -> Self {
        let families = info.role.families();
        Self {
            family: families[0],
            fallbacks: &families[1..],
            em_size: info.size,
            style: info.style,
        }
    }

    /// CSS-style shorthand, e.g. `italic bold 0.15px Arial`.
    pub fn css(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if self.style.contains(FontStyle::ITALIC) {
            parts.push("italic".to_string());
        }
        if self.style.contains(FontStyle::BOLD) {
            parts.push("bold".to_string());
        }
        parts.push(format!("{}px", self.em_size));
        parts.push(format!("\"{}\"", self.family));
        parts.join(" ")
    }
}

/// The four font slots an element can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSlot {
    Normal,
    Small,
    Medium,
    Large,
}

impl FontSlot {
    pub const ALL: [FontSlot; 4] = [Self::Normal, Self::Small, Self::Medium, Self::Large];

    fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

/// Build-once storage for an element's font handles.
///
/// Belongs to exactly one element instance: cloning yields an empty cache and
/// equality ignores it, since handles are derived from the descriptors.
#[derive(Default)]
pub struct FontCache {
    slots: [OnceCell<Arc<Font>>; 4],
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `slot`, materialized from `info` on first call.
    pub fn get_or_build(&self, slot: FontSlot, info: &FontInfo) -> Arc<Font> {
        self.slots[slot.index()]
            .get_or_init(|| Arc::new(Font::from_info(info)))
            .clone()
    }

    /// Drop the handle for `slot` so the next access rebuilds it.
    pub fn reset(&mut self, slot: FontSlot) {
        self.slots[slot.index()].take();
    }

    pub fn is_built(&self, slot: FontSlot) -> bool {
        self.slots[slot.index()].get().is_some()
    }

    pub fn built_count(&self) -> usize {
        self.slots.iter().filter(|cell| cell.get().is_some()).count()
    }
}

impl Clone for FontCache {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl PartialEq for FontCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl fmt::Debug for FontCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontCache")
            .field("built", &self.built_count())
            .finish()
    }
}
