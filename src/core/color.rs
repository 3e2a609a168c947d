use serde::{Deserialize, Serialize};

#[cfg(feature = "egui")]
use egui::Color32;

/// Serializable RGBA color, straight (unmultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(169, 169, 169);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const DIM_GRAY: Color = Color::rgb(105, 105, 105);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const DARK_CYAN: Color = Color::rgb(0, 139, 139);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const WHEAT: Color = Color::rgb(245, 222, 179);
    pub const DEEP_SKY_BLUE: Color = Color::rgb(0, 191, 255);
    pub const MEDIUM_BLUE: Color = Color::rgb(0, 0, 205);
    pub const ANTIQUE_WHITE: Color = Color::rgb(250, 235, 215);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a replaced alpha channel
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Luma-weighted gray of the same alpha
    pub fn to_grayscale(self) -> Self {
        let luma = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        let v = luma.round().clamp(0.0, 255.0) as u8;
        Self::new(v, v, v, self.a)
    }

    /// `#rrggbb` or `#rrggbbaa`
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// House palette shared by the color styles
pub struct ChartColors;

impl ChartColors {
    pub const RED: Color = Color::rgb(0xE3, 0x27, 0x36);
    pub const AMBER: Color = Color::rgb(0xFF, 0xCC, 0x00);
    pub const BLUE: Color = Color::rgb(0x2E, 0x86, 0xC1);
    pub const LIGHT_BLUE: Color = Color::rgb(0x63, 0xB8, 0xE6);
    pub const DARK_BLUE: Color = Color::rgb(0x1D, 0x2A, 0x58);
    pub const PRINT_ROUTE: Color = Color::rgb(0x66, 0x99, 0x33);
    pub const DRAFT_INK: Color = Color::rgb(0x30, 0x30, 0x30);
    pub const FASA_INK: Color = Color::rgb(0x5C, 0x40, 0x33);
    pub const CANDY_NIGHT: Color = Color::rgb(0x0C, 0x0F, 0x25);
}

#[cfg(feature = "egui")]
impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

#[cfg(feature = "egui")]
impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_keeps_channels() {
        let c = ChartColors::RED.with_alpha(48);
        assert_eq!((c.r, c.g, c.b, c.a), (0xE3, 0x27, 0x36, 48));
        assert!(!c.is_opaque());
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(Color::WHITE.to_grayscale(), Color::WHITE);
        assert_eq!(Color::BLACK.to_grayscale(), Color::BLACK);
        let g = ChartColors::AMBER.to_grayscale();
        assert_eq!(g.r, g.g);
        assert_eq!(g.g, g.b);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        assert_eq!(Color::BLACK.with_alpha(0x80).to_hex(), "#00000080");
    }
}
