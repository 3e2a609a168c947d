//! Resolution of a complete [`StyleConfig`] from scale, options and style.
//!
//! Resolution runs in three phases:
//!
//! 1. [`StyleConfig::scale_defaults`] derives every layer from scale and
//!    options alone (this is the poster look).
//! 2. The named style's [`StylePatch`](crate::style::named::StylePatch) list
//!    is folded over the defaults.
//! 3. [`StyleConfig::finalize`] applies the adjustments every style shares:
//!    name gating, name fading, foreground/highlight propagation, grayscale,
//!    glyph layout and the preferred tile format.
//!
//! All three phases are pure; equal inputs give equal configurations.

use crate::core::constants::*;
use crate::core::{ChartColors, Color, Interpolation, MapOptions, PointF, SizeF};
use crate::style::details::{
    GlyphLayout, HexCoordinateStyle, HexStyle, ImageFormat, MicroBorderStyle, WorldDetailLevel,
    WorldDetails,
};
use crate::style::element::{DashStyle, Pen, StyleElement, TextStyle};
use crate::style::font::{FontInfo, FontRole, FontSlot, FontStyle};
use crate::style::named::Style;
use crate::{Error, Result};
use serde::Serialize;

/// Scale-derived quantities shared by every phase of one resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    /// Scale clamped into `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
    pub options: MapOptions,
    /// Width of one screen pixel in parsecs.
    pub one_pixel: f32,
    /// Linear pen cap, `min(1, 64 / scale)`.
    pub pen_scale: f32,
    pub level: WorldDetailLevel,
}

impl ScaleContext {
    /// Clamp `scale` and derive the shared quantities; rejects non-finite or non-positive scales.
    pub fn new(scale: f64, options: MapOptions) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidScale(scale));
        }
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        if clamped != scale {
            log::debug!("clamping scale {} to {}", scale, clamped);
        }
        Ok(Self {
            scale: clamped,
            options,
            one_pixel: (1.0 / clamped) as f32,
            pen_scale: Self::pen_scale_for(clamped),
            level: WorldDetailLevel::for_scale(clamped),
        })
    }

    /// Pens keep a constant world-space width up to [`PEN_CAP_SCALE`], then
    /// shrink so they stay a constant on-screen width.
    pub fn pen_scale_for(scale: f64) -> f32 {
        if scale <= PEN_CAP_SCALE {
            1.0
        } else {
            (PEN_CAP_SCALE / scale) as f32
        }
    }

    /// Stroke width shared by macro and micro borders.
    pub fn border_pen_width(&self) -> f32 {
        if self.scale >= MICRO_BORDER_MIN_SCALE && self.scale >= PARSEC_MIN_SCALE {
            (16.0 / self.scale) as f32 * self.pen_scale
        } else {
            1.0
        }
    }

    /// Stroke width of micro routes.
    pub fn route_pen_width(&self) -> f32 {
        if self.scale <= 16.0 {
            0.2
        } else {
            0.08 * self.pen_scale
        }
    }

    fn between(&self, min: f64, max: f64) -> bool {
        self.scale >= min && self.scale <= max
    }
}

/// Complete rendering configuration for one `(scale, options, style)` tuple.
///
/// Consumers treat it as read-only; the only interior mutability is the
/// build-once font handle cache inside each element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleConfig {
    pub scale: f64,
    pub options: MapOptions,
    pub style: Style,

    pub background_color: Color,
    pub foreground_color: Color,
    pub highlight_color: Color,
    /// Nebula imagery behind the map.
    pub use_background_image: bool,
    /// Galaxy imagery behind the map, faded by `deep_background_opacity`.
    pub use_galaxy_image: bool,
    pub deep_background_opacity: f32,
    pub grayscale: bool,
    pub light_background: bool,
    pub show_rift_overlay: bool,
    pub rift_opacity: f32,
    pub hex_content_scale: f32,
    pub hex_rotation: f32,
    pub preferred_format: ImageFormat,

    pub t5_allegiance_codes: bool,
    pub show_world_detail_colors: bool,
    pub lower_case_allegiance: bool,
    pub show_gas_giant_ring: bool,
    pub number_all_hexes: bool,
    pub hex_coordinate_style: HexCoordinateStyle,
    pub use_world_images: bool,

    pub show_some_sector_names: bool,
    pub show_all_sector_names: bool,
    pub show_micro_names: bool,
    pub fill_micro_borders: bool,
    pub fade_sector_subsector_names: bool,

    pub world_detail_level: WorldDetailLevel,
    pub world_details: WorldDetails,
    pub hex_style: HexStyle,
    pub micro_border_style: MicroBorderStyle,
    pub layout: GlyphLayout,

    pub sector_grid: StyleElement,
    pub subsector_grid: StyleElement,
    pub parsec_grid: StyleElement,
    pub sector_name: StyleElement,
    pub subsector_names: StyleElement,
    pub mega_names: StyleElement,
    pub macro_names: StyleElement,
    pub macro_routes: StyleElement,
    pub macro_borders: StyleElement,
    pub micro_borders: StyleElement,
    pub micro_routes: StyleElement,
    pub capitals: StyleElement,
    pub worlds: StyleElement,
    pub world_water: StyleElement,
    pub world_no_water: StyleElement,
    pub hex_number: StyleElement,
    pub amber_zone: StyleElement,
    pub red_zone: StyleElement,
    pub blue_zone: StyleElement,
    pub pseudo_random_stars: StyleElement,
    pub placeholder: StyleElement,
    pub anomaly: StyleElement,
    pub droyne_worlds: StyleElement,
    pub ancients_worlds: StyleElement,
    pub minor_homeworlds: StyleElement,
    pub population_overlay: StyleElement,
    pub importance_overlay: StyleElement,
    pub highlight_worlds: StyleElement,
}

/// Number of drawable layers in a [`StyleConfig`].
pub const ELEMENT_COUNT: usize = 28;

const ELEMENT_NAMES: [&str; ELEMENT_COUNT] = [
    "sector_grid",
    "subsector_grid",
    "parsec_grid",
    "sector_name",
    "subsector_names",
    "mega_names",
    "macro_names",
    "macro_routes",
    "macro_borders",
    "micro_borders",
    "micro_routes",
    "capitals",
    "worlds",
    "world_water",
    "world_no_water",
    "hex_number",
    "amber_zone",
    "red_zone",
    "blue_zone",
    "pseudo_random_stars",
    "placeholder",
    "anomaly",
    "droyne_worlds",
    "ancients_worlds",
    "minor_homeworlds",
    "population_overlay",
    "importance_overlay",
    "highlight_worlds",
];

impl StyleConfig {
    /// Resolve the configuration for `scale`, `options` and `style`.
    ///
    /// Fails only for a non-finite or non-positive scale.
    pub fn resolve(scale: f64, options: MapOptions, style: Style) -> Result<Self> {
        let ctx = ScaleContext::new(scale, options)?;
        let defaults = Self::scale_defaults(&ctx)?;
        let mut patched = style
            .patches()
            .iter()
            .try_fold(defaults, |config, patch| patch.apply(config, &ctx))?;
        patched.style = style;
        patched.finalize(&ctx)
    }

    /// Phase 1: everything that follows from scale and options alone.
    pub fn scale_defaults(ctx: &ScaleContext) -> Result<Self> {
        let scale = ctx.scale;
        let options = ctx.options;
        let foreground = Color::WHITE;

        let worlds_visible = scale >= WORLD_MIN_SCALE;
        let subsector_grid_visible =
            scale >= SUBSECTOR_GRID_MIN_SCALE && options.contains(MapOptions::SUBSECTOR_GRID);
        let show_some_sector_names = ctx.between(SECTOR_NAME_MIN_SCALE, SECTOR_NAME_MAX_SCALE)
            && options.any_sector_names();
        let show_all_sector_names = show_some_sector_names
            && (scale >= SECTOR_NAME_ALL_SELECTED_SCALE
                || options.contains(MapOptions::SECTORS_ALL));

        let deep_background_opacity = Interpolation::log_scale(
            1.0,
            0.0,
            scale,
            DEEP_BACKGROUND_FADE_MIN_SCALE,
            DEEP_BACKGROUND_FADE_MAX_SCALE,
        );
        let rift_opacity = Interpolation::log_scale(
            0.0,
            RIFT_MAX_OPACITY,
            scale,
            RIFT_FADE_MIN_SCALE,
            RIFT_FADE_MAX_SCALE,
        );

        let hex_style =
            if !options.contains(MapOptions::FORCE_HEXES) && scale < PARSEC_HEX_MIN_SCALE {
                HexStyle::Square
            } else {
                HexStyle::Hex
            };
        let micro_border_style = match hex_style {
            HexStyle::Square => MicroBorderStyle::Square,
            _ => MicroBorderStyle::Hex,
        };

        let mut world_details = ctx.level.default_details();
        if ctx.level == WorldDetailLevel::Poster && scale >= WORLD_UWP_MIN_SCALE {
            world_details.insert(WorldDetails::UWP);
        }

        let grid_alpha =
            Interpolation::log_scale_alpha(scale, SECTOR_GRID_MIN_SCALE, SECTOR_GRID_FULL_SCALE);
        let grid_color = Color::GRAY.with_alpha(grid_alpha);
        let one_pixel = ctx.one_pixel;
        let pen_scale = ctx.pen_scale;
        let border_width = ctx.border_pen_width();

        let sector_grid_width = one_pixel * if subsector_grid_visible { 4.0 } else { 2.0 };
        let sector_grid = StyleElement::new(
            scale >= SECTOR_GRID_MIN_SCALE && options.contains(MapOptions::SECTOR_GRID),
        )
        .with_pen(Pen::new(grid_color, sector_grid_width)?);
        let subsector_grid = StyleElement::new(subsector_grid_visible)
            .with_pen(Pen::new(grid_color, one_pixel * 2.0)?);
        let parsec_grid =
            StyleElement::new(scale >= PARSEC_MIN_SCALE).with_pen(Pen::new(grid_color, one_pixel)?);

        let name_layout = TextStyle {
            rotation: -50.0,
            scale: SizeF::new(0.75, 1.0),
            translation: PointF::ORIGIN,
            uppercase: false,
            wrap: true,
        };
        let sector_name = StyleElement::new(show_some_sector_names)
            .with_text_color(foreground)
            .with_text_style(name_layout)
            .with_font(FontSlot::Normal, FontInfo::regular(FontRole::Sans, 5.5));
        let subsector_names = StyleElement::new(
            ctx.between(SUBSECTOR_NAME_MIN_SCALE, SUBSECTOR_NAME_MAX_SCALE)
                && options.any_sector_names(),
        )
        .with_text_color(foreground)
        .with_text_style(name_layout)
        .with_font(FontSlot::Normal, FontInfo::regular(FontRole::Sans, 1.5));

        // Mega labels hold a constant on-screen size, so their world-space
        // size grows as the map zooms out.
        let mega_factor = (1.0 / scale) as f32;
        let mega_names = StyleElement::new(scale <= MEGA_LABEL_MAX_SCALE && options.any_names())
            .with_text_colors(foreground, ChartColors::RED)
            .with_font(
                FontSlot::Normal,
                FontInfo::new(FontRole::Sans, 24.0 * mega_factor, FontStyle::BOLD),
            )
            .with_font(FontSlot::Medium, FontInfo::regular(FontRole::Sans, 22.0 * mega_factor))
            .with_font(
                FontSlot::Small,
                FontInfo::new(FontRole::Sans, 18.0 * mega_factor, FontStyle::ITALIC),
            );
        let macro_names =
            StyleElement::new(ctx.between(MACRO_LABEL_MIN_SCALE, MACRO_LABEL_MAX_SCALE))
                .with_text_colors(ChartColors::RED, foreground)
                .with_font(
                    FontSlot::Normal,
                    FontInfo::new(FontRole::Sans, 8.0 / 1.4, FontStyle::BOLD),
                )
                .with_font(FontSlot::Small, FontInfo::regular(FontRole::Sans, 5.0 / 1.4))
                .with_font(
                    FontSlot::Medium,
                    FontInfo::new(FontRole::Sans, 6.5 / 1.4, FontStyle::ITALIC),
                );

        let macro_routes =
            StyleElement::new(ctx.between(MACRO_ROUTE_MIN_SCALE, MACRO_ROUTE_MAX_SCALE))
                .with_pen(Pen::dashed(Color::WHITE, border_width, DashStyle::Dash)?);
        let any_borders = options.any_borders();
        let macro_borders = StyleElement::new(
            scale >= MACRO_BORDER_MIN_SCALE && scale < MICRO_BORDER_MIN_SCALE && any_borders,
        )
        .with_pen(Pen::new(ChartColors::RED, border_width)?);
        let micro_borders_visible = scale >= MICRO_BORDER_MIN_SCALE && any_borders;
        let micro_border_size = if scale < 32.0 { 0.6 } else { 0.25 };
        let micro_borders = StyleElement::new(micro_borders_visible)
            .with_pen(Pen::new(ChartColors::RED, border_width)?)
            .with_fill(ChartColors::RED.with_alpha(0x40))
            .with_text_color(ChartColors::RED)
            .with_font(
                FontSlot::Normal,
                FontInfo::new(FontRole::Sans, micro_border_size, FontStyle::BOLD),
            )
            .with_font(FontSlot::Small, FontInfo::regular(FontRole::Sans, 0.15))
            .with_font(FontSlot::Large, FontInfo::new(FontRole::Sans, 0.75, FontStyle::BOLD));
        let micro_routes = StyleElement::new(scale >= ROUTE_MIN_SCALE)
            .with_pen(Pen::new(Color::GRAY, ctx.route_pen_width())?);

        let capitals = StyleElement::new(
            ctx.between(MACRO_WORLDS_MIN_SCALE, MACRO_WORLDS_MAX_SCALE)
                && options.any_world_markers(),
        )
        .with_fill(Color::WHEAT)
        .with_text_colors(foreground, ChartColors::RED)
        .with_font(FontSlot::Normal, FontInfo::new(FontRole::Sans, 3.0, FontStyle::BOLD));

        let poster = ctx.level == WorldDetailLevel::Poster;
        let world_font_size = if poster { 0.15 } else { 0.2 };
        let world_label_position = if world_details.contains(WorldDetails::UWP) {
            PointF::new(0.0, 0.17)
        } else {
            PointF::new(0.0, 0.3)
        };
        let worlds = StyleElement::new(worlds_visible)
            .with_text_colors(foreground, ChartColors::RED)
            .with_position(world_label_position)
            .with_font(
                FontSlot::Normal,
                FontInfo::new(FontRole::Sans, world_font_size, FontStyle::BOLD),
            )
            .with_font(FontSlot::Small, FontInfo::regular(FontRole::Sans, 0.1))
            .with_font(FontSlot::Medium, FontInfo::regular(FontRole::Sans, 0.125))
            .with_font(FontSlot::Large, FontInfo::new(FontRole::Sans, 0.25, FontStyle::BOLD));
        let world_water = StyleElement::new(worlds_visible)
            .with_fill(Color::DEEP_SKY_BLUE)
            .with_pen(Pen::new(Color::TRANSPARENT, 0.03 * pen_scale)?);
        let world_no_water = StyleElement::new(worlds_visible)
            .with_fill(Color::WHITE)
            .with_pen(Pen::new(Color::TRANSPARENT, 0.03 * pen_scale)?);
        let hex_number = StyleElement::new(world_details.contains(WorldDetails::HEX))
            .with_text_color(foreground)
            .with_position(PointF::new(0.0, -0.5))
            .with_font(FontSlot::Normal, FontInfo::regular(FontRole::Sans, 0.1));

        let zone_width = 0.05 * pen_scale;
        let zone = |color: Color| -> Result<StyleElement> {
            Ok(StyleElement::new(world_details.contains(WorldDetails::ZONE))
                .with_pen(Pen::new(color, zone_width)?))
        };
        let amber_zone = zone(ChartColors::AMBER)?;
        let red_zone = zone(ChartColors::RED)?;
        let blue_zone = zone(ChartColors::BLUE)?;

        let pseudo_random_stars = StyleElement::new(ctx.between(
            PSEUDO_RANDOM_STARS_MIN_SCALE,
            PSEUDO_RANDOM_STARS_MAX_SCALE,
        ))
        .with_fill(Color::WHITE);

        let symbol = FontInfo::regular(FontRole::Symbol, 0.15);
        let detailed = ctx.level >= WorldDetailLevel::Atlas;
        let placeholder = StyleElement::glyph(worlds_visible, "*", foreground)
            .with_position(PointF::new(0.0, 0.17))
            .with_font(FontSlot::Normal, FontInfo::new(FontRole::Sans, 0.6, FontStyle::BOLD));
        let anomaly = StyleElement::glyph(worlds_visible, "\u{2316}", ChartColors::LIGHT_BLUE)
            .with_font(FontSlot::Normal, symbol);
        let droyne_worlds =
            StyleElement::glyph(worlds_visible && detailed, "\u{2605}\u{2606}", ChartColors::RED)
                .with_font(FontSlot::Normal, symbol);
        let ancients_worlds =
            StyleElement::glyph(worlds_visible && detailed, "\u{2600}", ChartColors::AMBER)
                .with_font(FontSlot::Normal, symbol);
        let minor_homeworlds = StyleElement::glyph(
            scale >= WORLD_FULL_MIN_SCALE && options.contains(MapOptions::WORLDS_HOMEWORLDS),
            "\u{273B}",
            Color::YELLOW,
        )
        .with_font(FontSlot::Normal, symbol);

        // Overlays share the world threshold; the renderer draws them only
        // when the request carries overlay data.
        let overlay_pen = Pen::dashed(Color::GRAY, 0.03 * pen_scale, DashStyle::Dash)?;
        let population_overlay = StyleElement::new(worlds_visible)
            .with_fill(Color::new(0xff, 0xff, 0x00, 0x80))
            .with_pen(overlay_pen.clone());
        let importance_overlay = StyleElement::new(worlds_visible)
            .with_fill(Color::new(0x80, 0xff, 0x00, 0x20))
            .with_pen(overlay_pen.clone());
        let highlight_worlds = StyleElement::new(worlds_visible)
            .with_fill(Color::new(0xff, 0x00, 0x00, 0x80))
            .with_pen(overlay_pen);

        Ok(Self {
            scale,
            options,
            style: Style::Poster,
            background_color: Color::BLACK,
            foreground_color: foreground,
            highlight_color: ChartColors::RED,
            use_background_image: false,
            use_galaxy_image: deep_background_opacity > 0.0,
            deep_background_opacity,
            grayscale: false,
            light_background: false,
            show_rift_overlay: scale <= PSEUDO_RANDOM_STARS_MAX_SCALE,
            rift_opacity,
            hex_content_scale: 1.0,
            hex_rotation: 0.0,
            preferred_format: ImageFormat::Png,
            t5_allegiance_codes: scale >= T5_ALLEGIANCE_CODE_MIN_SCALE,
            show_world_detail_colors: poster && options.contains(MapOptions::WORLD_COLORS),
            lower_case_allegiance: scale < WORLD_FULL_MIN_SCALE,
            show_gas_giant_ring: false,
            number_all_hexes: false,
            hex_coordinate_style: HexCoordinateStyle::Sector,
            use_world_images: false,
            show_some_sector_names,
            show_all_sector_names,
            show_micro_names: scale >= MICRO_NAME_MIN_SCALE && options.any_names(),
            fill_micro_borders: micro_borders_visible
                && options.contains(MapOptions::FILLED_BORDERS),
            fade_sector_subsector_names: true,
            world_detail_level: ctx.level,
            world_details,
            hex_style,
            micro_border_style,
            layout: GlyphLayout::for_details(world_details),
            sector_grid,
            subsector_grid,
            parsec_grid,
            sector_name,
            subsector_names,
            mega_names,
            macro_names,
            macro_routes,
            macro_borders,
            micro_borders,
            micro_routes,
            capitals,
            worlds,
            world_water,
            world_no_water,
            hex_number,
            amber_zone,
            red_zone,
            blue_zone,
            pseudo_random_stars,
            placeholder,
            anomaly,
            droyne_worlds,
            ancients_worlds,
            minor_homeworlds,
            population_overlay,
            importance_overlay,
            highlight_worlds,
        })
    }

    /// Phase 3: adjustments every style receives after its own patches.
    pub fn finalize(mut self, ctx: &ScaleContext) -> Result<Self> {
        // Minor names only when the user asked for names at all.
        if !ctx.options.any_names() {
            self.world_details.remove(WorldDetails::ALL_NAMES);
        }
        if !self.worlds.visible {
            self.world_details = WorldDetails::empty();
        }
        self.show_world_detail_colors &= self.world_details.contains(WorldDetails::TYPE);

        let foreground = self.foreground_color;
        let highlight = self.highlight_color;
        for element in [
            &mut self.worlds,
            &mut self.hex_number,
            &mut self.mega_names,
            &mut self.placeholder,
        ] {
            element.text_color = foreground;
        }
        for element in [&mut self.worlds, &mut self.capitals, &mut self.mega_names] {
            element.text_highlight_color = highlight;
        }
        self.highlight_worlds.pen.color = highlight;

        let (sector_alpha, subsector_alpha) =
            if !self.fade_sector_subsector_names || ctx.scale < 16.0 {
                (255, 255)
            } else if ctx.scale < 48.0 {
                (128, 128)
            } else {
                (48, 64)
            };
        self.sector_name.text_color = foreground.with_alpha(sector_alpha);
        self.subsector_names.text_color = foreground.with_alpha(subsector_alpha);

        self.hex_number.visible = self.worlds.visible
            && (self.world_details.contains(WorldDetails::HEX)
                || (self.number_all_hexes && self.parsec_grid.visible));
        for zone in [&mut self.amber_zone, &mut self.red_zone, &mut self.blue_zone] {
            zone.visible = self.world_details.contains(WorldDetails::ZONE);
        }
        self.layout = GlyphLayout::for_details(self.world_details);

        if self.grayscale {
            self.apply_grayscale();
        }

        self.preferred_format = match self.style {
            Style::Candy => ImageFormat::Jpeg,
            _ => ImageFormat::Png,
        };

        self.validate()?;
        Ok(self)
    }

    fn apply_grayscale(&mut self) {
        self.background_color = self.background_color.to_grayscale();
        self.foreground_color = self.foreground_color.to_grayscale();
        self.highlight_color = self.highlight_color.to_grayscale();
        for element in self.elements_mut() {
            element.fill_color = element.fill_color.to_grayscale();
            element.text_color = element.text_color.to_grayscale();
            element.text_highlight_color = element.text_highlight_color.to_grayscale();
            element.pen.color = element.pen.color.to_grayscale();
        }
    }

    /// Check the invariants the drawing backend relies on.
    pub fn validate(&self) -> Result<()> {
        for (name, element) in self.elements() {
            let width = element.pen.width();
            if !(width.is_finite() && width > 0.0) {
                log::debug!("element {} has invalid pen width {}", name, width);
                return Err(Error::ZeroPenWidth(width));
            }
        }
        Ok(())
    }

    /// Every drawable layer paired with its name, in draw order.
    pub fn elements(&self) -> [(&'static str, &StyleElement); ELEMENT_COUNT] {
        let refs = [
            &self.sector_grid,
            &self.subsector_grid,
            &self.parsec_grid,
            &self.sector_name,
            &self.subsector_names,
            &self.mega_names,
            &self.macro_names,
            &self.macro_routes,
            &self.macro_borders,
            &self.micro_borders,
            &self.micro_routes,
            &self.capitals,
            &self.worlds,
            &self.world_water,
            &self.world_no_water,
            &self.hex_number,
            &self.amber_zone,
            &self.red_zone,
            &self.blue_zone,
            &self.pseudo_random_stars,
            &self.placeholder,
            &self.anomaly,
            &self.droyne_worlds,
            &self.ancients_worlds,
            &self.minor_homeworlds,
            &self.population_overlay,
            &self.importance_overlay,
            &self.highlight_worlds,
        ];
        let mut i = 0;
        refs.map(|element| {
            let name = ELEMENT_NAMES[i];
            i += 1;
            (name, element)
        })
    }

    /// Mutable access to every layer, in the same order as [`Self::elements`].
    pub fn elements_mut(&mut self) -> [&mut StyleElement; ELEMENT_COUNT] {
        [
            &mut self.sector_grid,
            &mut self.subsector_grid,
            &mut self.parsec_grid,
            &mut self.sector_name,
            &mut self.subsector_names,
            &mut self.mega_names,
            &mut self.macro_names,
            &mut self.macro_routes,
            &mut self.macro_borders,
            &mut self.micro_borders,
            &mut self.micro_routes,
            &mut self.capitals,
            &mut self.worlds,
            &mut self.world_water,
            &mut self.world_no_water,
            &mut self.hex_number,
            &mut self.amber_zone,
            &mut self.red_zone,
            &mut self.blue_zone,
            &mut self.pseudo_random_stars,
            &mut self.placeholder,
            &mut self.anomaly,
            &mut self.droyne_worlds,
            &mut self.ancients_worlds,
            &mut self.minor_homeworlds,
            &mut self.population_overlay,
            &mut self.importance_overlay,
            &mut self.highlight_worlds,
        ]
    }

    /// Layer looked up by its field name.
    pub fn element(&self, name: &str) -> Option<&StyleElement> {
        self.elements()
            .into_iter()
            .find(|(element_name, _)| *element_name == name)
            .map(|(_, element)| element)
    }

    /// MIME type of the preferred tile format.
    pub fn mime_type(&self) -> &'static str {
        self.preferred_format.mime_type()
    }

    /// Serialize the configuration, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Shorthand for [`StyleConfig::resolve`].
pub fn resolve(scale: f64, options: MapOptions, style: Style) -> Result<StyleConfig> {
    StyleConfig::resolve(scale, options, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_scales_fail_fast() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                resolve(scale, MapOptions::empty(), Style::Poster),
                Err(Error::InvalidScale(_))
            ));
        }
    }

    #[test]
    fn test_out_of_range_scales_are_clamped() {
        let tiny = resolve(1e-9, MapOptions::empty(), Style::Poster).unwrap();
        assert_eq!(tiny.scale, MIN_SCALE);
        let huge = resolve(1e9, MapOptions::empty(), Style::Poster).unwrap();
        assert_eq!(huge.scale, MAX_SCALE);
        assert!(huge.micro_routes.pen.width() > 0.0);
    }

    #[test]
    fn test_pen_scale_is_linear_cap() {
        assert_eq!(ScaleContext::pen_scale_for(1.0), 1.0);
        assert_eq!(ScaleContext::pen_scale_for(64.0), 1.0);
        assert_eq!(ScaleContext::pen_scale_for(128.0), 0.5);
        assert_eq!(ScaleContext::pen_scale_for(512.0), 0.125);
    }

    #[test]
    fn test_border_and_route_widths() {
        let coarse = ScaleContext::new(8.0, MapOptions::empty()).unwrap();
        assert_eq!(coarse.border_pen_width(), 1.0);
        assert_eq!(coarse.route_pen_width(), 0.2);

        let fine = ScaleContext::new(128.0, MapOptions::empty()).unwrap();
        assert_eq!(fine.border_pen_width(), 16.0 / 128.0 * 0.5);
        assert_eq!(fine.route_pen_width(), 0.08 * 0.5);
    }

    #[test]
    fn test_sector_names_selection() {
        let selected = resolve(2.0, MapOptions::SECTORS_SELECTED, Style::Poster).unwrap();
        assert!(selected.show_some_sector_names);
        assert!(!selected.show_all_sector_names);

        let all = resolve(2.0, MapOptions::SECTORS_ALL, Style::Poster).unwrap();
        assert!(all.show_all_sector_names);

        let zoomed = resolve(4.0, MapOptions::SECTORS_SELECTED, Style::Poster).unwrap();
        assert!(zoomed.show_all_sector_names);

        let none = resolve(4.0, MapOptions::empty(), Style::Poster).unwrap();
        assert!(!none.show_some_sector_names);
        assert!(!none.sector_name.visible);
    }

    #[test]
    fn test_hex_style_follows_scale_and_force_flag() {
        let square = resolve(32.0, MapOptions::empty(), Style::Poster).unwrap();
        assert_eq!(square.hex_style, HexStyle::Square);
        assert_eq!(square.micro_border_style, MicroBorderStyle::Square);

        let forced = resolve(32.0, MapOptions::FORCE_HEXES, Style::Poster).unwrap();
        assert_eq!(forced.hex_style, HexStyle::Hex);
        assert_eq!(forced.micro_border_style, MicroBorderStyle::Hex);

        let deep = resolve(64.0, MapOptions::empty(), Style::Poster).unwrap();
        assert_eq!(deep.hex_style, HexStyle::Hex);
    }

    #[test]
    fn test_borders_need_option_bits() {
        let off = resolve(8.0, MapOptions::empty(), Style::Poster).unwrap();
        assert!(!off.micro_borders.visible);
        assert!(!off.fill_micro_borders);

        let on = resolve(
            8.0,
            MapOptions::BORDERS_MAJOR | MapOptions::FILLED_BORDERS,
            Style::Poster,
        )
        .unwrap();
        assert!(on.micro_borders.visible);
        assert!(on.fill_micro_borders);
        assert!(!on.macro_borders.visible);

        let macro_view = resolve(1.0, MapOptions::BORDERS_MINOR, Style::Poster).unwrap();
        assert!(macro_view.macro_borders.visible);
        assert!(!macro_view.micro_borders.visible);
    }

    #[test]
    fn test_names_option_gates_minor_names() {
        let named = resolve(64.0, MapOptions::NAMES_MINOR, Style::Poster).unwrap();
        assert!(named.world_details.contains(WorldDetails::ALL_NAMES));
        assert!(named.show_micro_names);

        let unnamed = resolve(64.0, MapOptions::empty(), Style::Poster).unwrap();
        assert!(!unnamed.world_details.contains(WorldDetails::ALL_NAMES));
        assert!(unnamed.world_details.contains(WorldDetails::KEY_NAMES));
        assert!(!unnamed.show_micro_names);
    }

    #[test]
    fn test_sector_names_fade_with_scale() {
        let options = MapOptions::SECTORS_ALL;
        let near = resolve(32.0, options, Style::Poster).unwrap();
        assert_eq!(near.subsector_names.text_color.a, 128);
        let far = resolve(8.0, options, Style::Poster).unwrap();
        assert_eq!(far.sector_name.text_color.a, 255);
        let deep = resolve(64.0, options, Style::Poster).unwrap();
        assert_eq!(deep.sector_name.text_color.a, 48);
        assert_eq!(deep.subsector_names.text_color.a, 64);

        // Styles that disable fading keep names opaque.
        let candy = resolve(64.0, options, Style::Candy).unwrap();
        assert_eq!(candy.sector_name.text_color.a, 255);
    }

    #[test]
    fn test_grayscale_style_has_no_chroma() {
        let atlas = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Atlas).unwrap();
        assert!(atlas.grayscale);
        for (name, element) in atlas.elements() {
            for color in [element.fill_color, element.text_color, element.pen.color] {
                assert!(color.r == color.g && color.g == color.b, "{name} kept chroma");
            }
        }
    }

    #[test]
    fn test_element_lookup_by_name() {
        let config = resolve(16.0, MapOptions::DEFAULT_VIEW, Style::Poster).unwrap();
        assert_eq!(config.elements().len(), ELEMENT_COUNT);
        assert!(config.element("parsec_grid").unwrap().visible);
        assert!(config.element("no_such_layer").is_none());
    }

    #[test]
    fn test_layout_shifts_with_uwp_line() {
        let poster = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Poster).unwrap();
        assert_eq!(poster.layout, GlyphLayout::POSTER);
        let uwp = resolve(128.0, MapOptions::DEFAULT_VIEW, Style::Poster).unwrap();
        assert_eq!(uwp.layout, GlyphLayout::POSTER.with_uwp_line());
        let atlas = resolve(32.0, MapOptions::DEFAULT_VIEW, Style::Poster).unwrap();
        assert_eq!(atlas.layout, GlyphLayout::ATLAS);
    }

    #[test]
    fn test_world_overlays_share_world_threshold() {
        let below = resolve(2.0, MapOptions::DEFAULT_VIEW, Style::Poster).unwrap();
        assert!(!below.population_overlay.visible);
        assert!(!below.importance_overlay.visible);
        assert!(!below.highlight_worlds.visible);

        let above = resolve(WORLD_MIN_SCALE, MapOptions::DEFAULT_VIEW, Style::Poster).unwrap();
        for overlay in [&above.population_overlay, &above.importance_overlay] {
            assert!(overlay.visible);
            assert_eq!(overlay.pen.dash_style(), DashStyle::Dash);
            assert!(overlay.pen.width() > 0.0);
        }
        assert_eq!(above.population_overlay.fill_color, Color::new(0xff, 0xff, 0x00, 0x80));
    }

    #[test]
    fn test_label_slots_are_populated() {
        let ctx = ScaleContext::new(0.5, MapOptions::DEFAULT_VIEW).unwrap();
        let defaults = StyleConfig::scale_defaults(&ctx).unwrap();
        let mega = &defaults.mega_names;
        assert_eq!(mega.descriptor(FontSlot::Normal).unwrap().size, 48.0);
        assert_eq!(mega.descriptor(FontSlot::Medium).unwrap().size, 44.0);
        assert_eq!(mega.descriptor(FontSlot::Small).unwrap().style, FontStyle::ITALIC);
        assert!(mega.descriptor(FontSlot::Large).is_none());
        assert_eq!(mega.text_highlight_color, ChartColors::RED);

        let sector = &defaults.sector_name;
        assert_eq!(sector.text_style.rotation, -50.0);
        assert_eq!(sector.text_highlight_color, Color::BLACK);
        assert_eq!(defaults.placeholder.content.as_deref(), Some("*"));
        assert_eq!(defaults.placeholder.position, PointF::new(0.0, 0.17));
    }
}
