use crate::core::{Color, PointF, SizeF};
use crate::style::font::{Font, FontCache, FontInfo, FontRole, FontSlot};
use crate::{Error, Result};
use serde::Serialize;
use std::sync::Arc;

#[cfg(feature = "egui")]
use egui::Stroke;

/// Stroke dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashStyle {
    Solid,
    Dash,
    Dot,
    DashDot,
    /// Pattern taken from [`Pen::custom_dash_pattern`]; only
    /// [`Pen::with_pattern`] selects it.
    Custom,
}

/// Stroke descriptor.
///
/// The width is always strictly positive, and a `Custom` dash always carries
/// its pattern. Both are checked when the pen is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pen {
    pub color: Color,
    width: f32,
    dash_style: DashStyle,
    custom_dash_pattern: Option<Vec<f32>>,
}

impl Pen {
    pub fn new(color: Color, width: f32) -> Result<Self> {
        Ok(Self {
            color,
            width: Self::check_width(width)?,
            dash_style: DashStyle::Solid,
            custom_dash_pattern: None,
        })
    }

    pub fn dashed(color: Color, width: f32, dash_style: DashStyle) -> Result<Self> {
        Self::new(color, width)?.with_dash(dash_style)
    }

    fn check_width(width: f32) -> Result<f32> {
        if width.is_finite() && width > 0.0 {
            Ok(width)
        } else {
            Err(Error::ZeroPenWidth(width))
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn dash_style(&self) -> DashStyle {
        self.dash_style
    }

    pub fn custom_dash_pattern(&self) -> Option<&[f32]> {
        self.custom_dash_pattern.as_deref()
    }

    pub fn with_width(self, width: f32) -> Result<Self> {
        Ok(Self {
            width: Self::check_width(width)?,
            ..self
        })
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Switch to one of the built-in dashes. `Custom` needs a pattern and is
    /// rejected here; use [`Pen::with_pattern`].
    pub fn with_dash(self, dash_style: DashStyle) -> Result<Self> {
        if dash_style == DashStyle::Custom {
            return Err(Error::InvalidDashPattern("custom dash needs a pattern".to_string()));
        }
        Ok(Self {
            dash_style,
            custom_dash_pattern: None,
            ..self
        })
    }

    /// Custom on/off pattern, in multiples of the pen width.
    pub fn with_pattern(self, pattern: Vec<f32>) -> Result<Self> {
        if pattern.is_empty() || pattern.iter().any(|len| !(len.is_finite() && *len > 0.0)) {
            return Err(Error::InvalidDashPattern(format!("{:?}", pattern)));
        }
        Ok(Self {
            dash_style: DashStyle::Custom,
            custom_dash_pattern: Some(pattern),
            ..self
        })
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash_style: DashStyle::Solid,
            custom_dash_pattern: None,
        }
    }
}

#[cfg(feature = "egui")]
impl From<&Pen> for Stroke {
    fn from(pen: &Pen) -> Self {
        Stroke::new(pen.width, pen.color)
    }
}

/// How text is positioned and shaped relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Degrees, clockwise.
    pub rotation: f32,
    pub scale: SizeF,
    pub translation: PointF,
    pub uppercase: bool,
    pub wrap: bool,
}

impl TextStyle {
    pub fn apply_case(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale: SizeF::UNIT,
            translation: PointF::ORIGIN,
            uppercase: false,
            wrap: false,
        }
    }
}

/// Treatment behind label text so it stays legible over busy layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextBackgroundStyle {
    #[default]
    None,
    Rectangle,
    Shadow,
    Outline,
    Filled,
}

/// Visual identity of one drawable layer.
///
/// Font descriptors are only reachable through [`StyleElement::set_font`]
/// and [`StyleElement::set_font_role`], which drop any handle already built
/// for the slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleElement {
    pub visible: bool,
    pub fill_color: Color,
    /// Fixed glyph text for marker overlays.
    pub content: Option<String>,
    pub pen: Pen,
    pub text_color: Color,
    pub text_highlight_color: Color,
    pub text_style: TextStyle,
    pub text_background_style: TextBackgroundStyle,
    font: Option<FontInfo>,
    small_font: Option<FontInfo>,
    medium_font: Option<FontInfo>,
    large_font: Option<FontInfo>,
    pub position: PointF,
    #[serde(skip)]
    fonts: FontCache,
}

impl StyleElement {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            fill_color: Color::TRANSPARENT,
            content: None,
            pen: Pen::default(),
            text_color: Color::BLACK,
            text_highlight_color: Color::BLACK,
            text_style: TextStyle::default(),
            text_background_style: TextBackgroundStyle::None,
            font: None,
            small_font: None,
            medium_font: None,
            large_font: None,
            position: PointF::ORIGIN,
            fonts: FontCache::new(),
        }
    }

    pub fn hidden() -> Self {
        Self::new(false)
    }

    /// Marker overlay that draws `content` as a glyph.
    pub fn glyph(visible: bool, content: &str, color: Color) -> Self {
        Self {
            content: Some(content.to_string()),
            ..Self::new(visible)
        }
        .with_text_colors(color, color)
    }

    pub fn with_pen(self, pen: Pen) -> Self {
        Self { pen, ..self }
    }

    pub fn with_fill(self, fill_color: Color) -> Self {
        Self { fill_color, ..self }
    }

    pub fn with_text_color(self, text_color: Color) -> Self {
        Self { text_color, ..self }
    }

    /// Normal and highlighted text colors.
    pub fn with_text_colors(self, text_color: Color, text_highlight_color: Color) -> Self {
        Self {
            text_color,
            text_highlight_color,
            ..self
        }
    }

    pub fn with_text_style(self, text_style: TextStyle) -> Self {
        Self { text_style, ..self }
    }

    pub fn with_position(self, position: PointF) -> Self {
        Self { position, ..self }
    }

    pub fn with_font(mut self, slot: FontSlot, info: FontInfo) -> Self {
        self.set_font(slot, Some(info));
        self
    }

    pub fn has_stroke(&self) -> bool {
        self.pen.color.a > 0
    }

    pub fn descriptor(&self, slot: FontSlot) -> Option<&FontInfo> {
        match slot {
            FontSlot::Normal => self.font.as_ref(),
            FontSlot::Small => self.small_font.as_ref(),
            FontSlot::Medium => self.medium_font.as_ref(),
            FontSlot::Large => self.large_font.as_ref(),
        }
    }

    fn descriptor_mut(&mut self, slot: FontSlot) -> &mut Option<FontInfo> {
        match slot {
            FontSlot::Normal => &mut self.font,
            FontSlot::Small => &mut self.small_font,
            FontSlot::Medium => &mut self.medium_font,
            FontSlot::Large => &mut self.large_font,
        }
    }

    /// Replace the descriptor for `slot`; its handle is rebuilt on next use.
    pub fn set_font(&mut self, slot: FontSlot, info: Option<FontInfo>) {
        *self.descriptor_mut(slot) = info;
        self.fonts.reset(slot);
    }

    /// Move every font slot to one family role, keeping sizes and styles.
    pub fn set_font_role(&mut self, role: FontRole) {
        for slot in FontSlot::ALL {
            if let Some(info) = self.descriptor(slot).copied() {
                self.set_font(slot, Some(info.with_role(role)));
            }
        }
    }

    /// Font handle for `slot`, built on first use and shared afterwards.
    pub fn font_handle(&self, slot: FontSlot) -> Option<Arc<Font>> {
        let info = self.descriptor(slot)?;
        Some(self.fonts.get_or_build(slot, info))
    }

    pub fn font(&self) -> Option<Arc<Font>> {
        self.font_handle(FontSlot::Normal)
    }

    pub fn small_font(&self) -> Option<Arc<Font>> {
        self.font_handle(FontSlot::Small)
    }

    pub fn medium_font(&self) -> Option<Arc<Font>> {
        self.font_handle(FontSlot::Medium)
    }

    pub fn large_font(&self) -> Option<Arc<Font>> {
        self.font_handle(FontSlot::Large)
    }

    pub fn built_font_count(&self) -> usize {
        self.fonts.built_count()
    }
}

impl Default for StyleElement {
    fn default() -> Self {
        Self::hidden()
    }
}
