//! Named style presets.
//!
//! Each preset is an ordered list of [`StylePatch`]es applied on top of the
//! scale-derived defaults. Patches only ever see the configuration produced by
//! the previous step, so a preset can be read (and tested) top to bottom.

use crate::core::constants::*;
use crate::core::{ChartColors, Color};
use crate::style::details::{HexCoordinateStyle, HexStyle, MicroBorderStyle, WorldDetails};
use crate::style::element::{DashStyle, Pen, TextBackgroundStyle};
use crate::style::font::FontRole;
use crate::style::resolver::{ScaleContext, StyleConfig};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of visual presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Dark background poster look; the scale defaults unchanged.
    #[default]
    Poster,
    /// Monochrome print.
    Atlas,
    /// Colorized print.
    Print,
    /// Rough ink sketch on paper.
    Draft,
    /// Pastiche of classic printed sector maps.
    Fasa,
    /// Saturated glossy imagery.
    Candy,
    /// Monospaced console rendering.
    Terminal,
}

impl Style {
    pub const ALL: [Style; 7] = [
        Self::Poster,
        Self::Atlas,
        Self::Print,
        Self::Draft,
        Self::Fasa,
        Self::Candy,
        Self::Terminal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Poster => "poster",
            Self::Atlas => "atlas",
            Self::Print => "print",
            Self::Draft => "draft",
            Self::Fasa => "fasa",
            Self::Candy => "candy",
            Self::Terminal => "terminal",
        }
    }

    /// Override cascade of this preset, in application order.
    pub fn patches(&self) -> &'static [StylePatch] {
        match self {
            Self::Poster => &[],
            Self::Atlas => &ATLAS,
            Self::Print => &PRINT,
            Self::Draft => &DRAFT,
            Self::Fasa => &FASA,
            Self::Candy => &CANDY,
            Self::Terminal => &TERMINAL,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

type PatchFn = fn(StyleConfig, &ScaleContext) -> Result<StyleConfig>;

/// One named step of a preset's override cascade
#[derive(Clone, Copy)]
pub struct StylePatch {
    pub name: &'static str,
    apply: PatchFn,
}

impl StylePatch {
    pub const fn new(name: &'static str, apply: PatchFn) -> Self {
        Self { name, apply }
    }

    pub fn apply(&self, config: StyleConfig, ctx: &ScaleContext) -> Result<StyleConfig> {
        (self.apply)(config, ctx)
    }
}

impl fmt::Debug for StylePatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StylePatch").field(&self.name).finish()
    }
}

static ATLAS: [StylePatch; 4] = [
    StylePatch::new("monochrome_palette", atlas_palette),
    StylePatch::new("no_deep_background", no_deep_background),
    StylePatch::new("clamp_rift_opacity", clamp_rift_opacity),
    StylePatch::new("boxed_world_names", boxed_world_names),
];

static PRINT: [StylePatch; 4] = [
    StylePatch::new("light_palette", print_palette),
    StylePatch::new("no_deep_background", no_deep_background),
    StylePatch::new("clamp_rift_opacity", clamp_rift_opacity),
    StylePatch::new("boxed_world_names", boxed_world_names),
];

static DRAFT: [StylePatch; 4] = [
    StylePatch::new("ink_palette", draft_palette),
    StylePatch::new("no_deep_background", no_deep_background),
    StylePatch::new("handwritten_labels", draft_labels),
    StylePatch::new("sketch_details", draft_details),
];

static FASA: [StylePatch; 5] = [
    StylePatch::new("ink_palette", fasa_palette),
    StylePatch::new("no_deep_background", no_deep_background),
    StylePatch::new("serif_labels", fasa_labels),
    StylePatch::new("numbered_hexes", fasa_hexes),
    StylePatch::new("sparse_details", fasa_details),
];

static CANDY: [StylePatch; 4] = [
    StylePatch::new("glossy_palette", candy_palette),
    StylePatch::new("shadowed_labels", candy_labels),
    StylePatch::new("relative_details", candy_details),
    StylePatch::new("relative_pens", candy_pens),
];

static TERMINAL: [StylePatch; 4] = [
    StylePatch::new("console_palette", terminal_palette),
    StylePatch::new("no_deep_background", no_deep_background),
    StylePatch::new("monospace_labels", terminal_labels),
    StylePatch::new("text_only_details", terminal_details),
];

const PRINT_RIFT_MAX_OPACITY: f32 = 0.70;

fn no_deep_background(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.use_background_image = false;
    c.use_galaxy_image = false;
    c.deep_background_opacity = 0.0;
    Ok(c)
}

fn clamp_rift_opacity(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.rift_opacity = c.rift_opacity.min(PRINT_RIFT_MAX_OPACITY);
    Ok(c)
}

fn boxed_world_names(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.worlds.text_background_style = TextBackgroundStyle::Filled;
    Ok(c)
}

/// Recolor the three grids, keeping their scale-derived alpha.
fn recolor_grids(c: &mut StyleConfig, color: Color) {
    for grid in [&mut c.parsec_grid, &mut c.subsector_grid, &mut c.sector_grid] {
        grid.pen.color = color.with_alpha(grid.pen.color.a);
    }
}

/// Copy of `pen` in `color` with a new dash.
fn restroke(pen: &Pen, color: Color, dash_style: DashStyle) -> Result<Pen> {
    pen.clone().with_color(color).with_dash(dash_style)
}

/// Light paper background shared by the print-like presets.
fn paper(c: &mut StyleConfig, background: Color, ink: Color) {
    c.light_background = true;
    c.background_color = background;
    c.foreground_color = ink;
    c.pseudo_random_stars.visible = false;
    recolor_grids(c, ink);
}

fn atlas_palette(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.grayscale = true;
    paper(&mut c, Color::WHITE, Color::BLACK);
    c.highlight_color = Color::GRAY;
    c.show_world_detail_colors = false;

    c.capitals.fill_color = Color::GRAY;
    c.capitals.text_color = Color::BLACK;
    c.amber_zone.pen.color = Color::LIGHT_GRAY;
    c.blue_zone.pen.color = Color::GRAY;
    c.red_zone.pen.color = Color::BLACK;
    c.macro_borders.pen.color = Color::BLACK;
    c.macro_routes.pen.color = Color::GRAY;
    c.micro_borders.pen.color = Color::BLACK;
    c.micro_borders.text_color = Color::GRAY;
    c.micro_routes.pen.color = Color::GRAY;
    c.macro_names.text_color = Color::BLACK;
    c.world_water.fill_color = Color::BLACK;
    c.world_no_water.fill_color = Color::WHITE;
    c.world_no_water.pen.color = Color::BLACK;
    Ok(c)
}

fn print_palette(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    paper(&mut c, Color::WHITE, Color::BLACK);
    c.highlight_color = ChartColors::RED;

    c.capitals.fill_color = Color::DARK_GRAY;
    c.capitals.text_color = Color::BLACK;
    c.macro_routes.pen.color = Color::GRAY;
    c.micro_routes.pen.color = ChartColors::PRINT_ROUTE;
    c.macro_names.text_color = ChartColors::DARK_BLUE;
    c.world_water.fill_color = Color::MEDIUM_BLUE;
    c.world_no_water.fill_color = Color::WHITE;
    c.world_no_water.pen.color = Color::BLACK;
    Ok(c)
}

fn draft_palette(mut c: StyleConfig, ctx: &ScaleContext) -> Result<StyleConfig> {
    let ink = ChartColors::DRAFT_INK;
    paper(&mut c, Color::ANTIQUE_WHITE, ink);
    c.highlight_color = ChartColors::RED;
    c.show_rift_overlay = false;
    c.show_world_detail_colors = false;

    c.micro_borders.pen = restroke(&c.micro_borders.pen, ink, DashStyle::Dash)?;
    c.macro_borders.pen = restroke(&c.macro_borders.pen, ink, DashStyle::Dash)?;
    c.micro_borders.text_color = ink;
    c.micro_routes.pen = restroke(&c.micro_routes.pen, Color::GRAY, DashStyle::Dot)?;
    c.macro_routes.pen.color = Color::GRAY;
    c.capitals.fill_color = ink;
    c.capitals.text_color = ink;
    c.macro_names.text_color = ink;
    c.world_water.fill_color = ink;
    c.world_no_water.fill_color = Color::ANTIQUE_WHITE;
    c.world_no_water.pen = Pen::new(ink, 0.03 * ctx.pen_scale)?;
    for zone in [&mut c.amber_zone, &mut c.red_zone, &mut c.blue_zone] {
        zone.pen.color = ink;
    }
    c.red_zone.pen = c.red_zone.pen.clone().with_dash(DashStyle::Solid)?;
    c.amber_zone.pen = c.amber_zone.pen.clone().with_dash(DashStyle::Dash)?;
    Ok(c)
}

fn draft_labels(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    for element in c.elements_mut() {
        element.set_font_role(FontRole::Handwriting);
    }
    for label in [
        &mut c.worlds,
        &mut c.sector_name,
        &mut c.subsector_names,
        &mut c.micro_borders,
        &mut c.macro_names,
    ] {
        label.text_style.uppercase = true;
    }
    c.worlds.text_background_style = TextBackgroundStyle::Outline;
    Ok(c)
}

fn draft_details(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.world_details.remove(WorldDetails::ASTEROIDS | WorldDetails::ALLEGIANCE);
    Ok(c)
}

fn fasa_palette(mut c: StyleConfig, ctx: &ScaleContext) -> Result<StyleConfig> {
    let ink = ChartColors::FASA_INK;
    paper(&mut c, Color::WHITE, ink);
    c.highlight_color = ink;
    c.show_rift_overlay = false;
    c.rift_opacity = 0.0;

    let border = c.micro_borders.pen.clone().with_color(ink);
    c.micro_borders.pen = border.with_pattern(vec![3.0, 1.0])?;
    c.macro_borders.pen.color = ink;
    c.micro_borders.text_color = ink;
    c.micro_routes.pen = restroke(&c.micro_routes.pen, ink, DashStyle::Dot)?;
    c.macro_routes.pen.color = ink;
    c.capitals.fill_color = ink;
    c.capitals.text_color = ink;
    c.macro_names.text_color = ink;
    c.world_water.fill_color = ink;
    c.world_no_water.fill_color = Color::WHITE;
    c.world_no_water.pen = Pen::new(ink, 0.03 * ctx.pen_scale)?;
    for zone in [&mut c.amber_zone, &mut c.red_zone, &mut c.blue_zone] {
        zone.pen.color = ink;
    }
    c.amber_zone.pen = c.amber_zone.pen.clone().with_dash(DashStyle::Dash)?;
    Ok(c)
}

fn fasa_labels(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    for element in c.elements_mut() {
        element.set_font_role(FontRole::Serif);
    }
    // Printed sector names ran level across the top of the sheet.
    for label in [&mut c.sector_name, &mut c.subsector_names] {
        label.text_style.rotation = 0.0;
        label.text_style.scale = crate::core::SizeF::UNIT;
        label.text_style.wrap = false;
        label.text_style.uppercase = true;
    }
    c.worlds.text_style.uppercase = true;
    c.worlds.text_background_style = TextBackgroundStyle::Rectangle;
    Ok(c)
}

fn fasa_hexes(mut c: StyleConfig, ctx: &ScaleContext) -> Result<StyleConfig> {
    if ctx.scale >= PARSEC_MIN_SCALE {
        c.hex_style = HexStyle::Hex;
    }
    c.micro_border_style = MicroBorderStyle::Curve;
    c.number_all_hexes = true;
    c.hex_coordinate_style = HexCoordinateStyle::Subsector;
    c.t5_allegiance_codes = false;
    Ok(c)
}

fn fasa_details(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.world_details
        .remove(WorldDetails::ALLEGIANCE | WorldDetails::ASTEROIDS | WorldDetails::HIGHLIGHT);
    c.show_world_detail_colors = false;
    c.fade_sector_subsector_names = false;
    Ok(c)
}

fn candy_palette(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.background_color = ChartColors::CANDY_NIGHT;
    c.foreground_color = Color::WHITE;
    c.highlight_color = ChartColors::AMBER;
    c.use_background_image = true;
    c.use_world_images = true;
    c.show_gas_giant_ring = true;
    c.show_rift_overlay = true;
    c.rift_opacity = c.rift_opacity.min(PRINT_RIFT_MAX_OPACITY);
    c.pseudo_random_stars.visible = false;
    c.fade_sector_subsector_names = false;
    recolor_grids(&mut c, ChartColors::LIGHT_BLUE);
    Ok(c)
}

fn candy_labels(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    for label in [&mut c.sector_name, &mut c.macro_names, &mut c.mega_names] {
        label.set_font_role(FontRole::SansBold);
    }
    c.worlds.text_background_style = TextBackgroundStyle::Shadow;
    c.sector_name.text_background_style = TextBackgroundStyle::Shadow;
    c.micro_borders.text_style.uppercase = true;
    Ok(c)
}

fn candy_details(mut c: StyleConfig, ctx: &ScaleContext) -> Result<StyleConfig> {
    if ctx.scale < CANDY_MIN_WORLD_NAME_SCALE {
        c.world_details.remove(WorldDetails::KEY_NAMES | WorldDetails::ALL_NAMES);
    }
    if ctx.scale < CANDY_MIN_UWP_SCALE {
        c.world_details.remove(WorldDetails::UWP);
    }
    if ctx.scale > CANDY_MAX_WORLD_RELATIVE_SCALE {
        c.hex_content_scale = (CANDY_MAX_WORLD_RELATIVE_SCALE / ctx.scale) as f32;
    }
    Ok(c)
}

fn candy_pens(mut c: StyleConfig, ctx: &ScaleContext) -> Result<StyleConfig> {
    let border_cap = (CANDY_MAX_BORDER_RELATIVE_SCALE / ctx.scale).min(1.0) as f32;
    let route_cap = (CANDY_MAX_ROUTE_RELATIVE_SCALE / ctx.scale).min(1.0) as f32;

    if ctx.scale >= MICRO_BORDER_MIN_SCALE && ctx.scale >= PARSEC_MIN_SCALE {
        let width = (16.0 / ctx.scale) as f32 * border_cap;
        c.micro_borders.pen = c.micro_borders.pen.clone().with_width(width)?;
        c.macro_borders.pen = c.macro_borders.pen.clone().with_width(width)?;
    }
    if ctx.scale > 16.0 {
        c.micro_routes.pen = c.micro_routes.pen.clone().with_width(0.08 * route_cap)?;
    }
    Ok(c)
}

fn terminal_palette(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.background_color = Color::BLACK;
    c.foreground_color = Color::CYAN;
    c.highlight_color = Color::WHITE;
    c.show_rift_overlay = false;
    c.pseudo_random_stars.visible = false;
    c.fade_sector_subsector_names = false;
    recolor_grids(&mut c, Color::DARK_CYAN);

    c.micro_borders.pen = restroke(&c.micro_borders.pen, Color::CYAN, DashStyle::Dot)?;
    c.macro_borders.pen = restroke(&c.macro_borders.pen, Color::CYAN, DashStyle::Dot)?;
    c.micro_borders.text_color = Color::CYAN;
    c.micro_routes.pen.color = Color::DIM_GRAY;
    c.macro_routes.pen.color = Color::DIM_GRAY;
    c.capitals.fill_color = Color::CYAN;
    c.capitals.text_color = Color::CYAN;
    c.macro_names.text_color = Color::CYAN;
    c.world_water.fill_color = Color::CYAN;
    c.world_no_water.fill_color = Color::BLACK;
    c.world_no_water.pen.color = Color::CYAN;
    c.amber_zone.pen.color = Color::YELLOW;
    c.red_zone.pen.color = Color::RED;
    c.blue_zone.pen.color = Color::WHITE;
    Ok(c)
}

fn terminal_labels(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    for element in c.elements_mut() {
        element.set_font_role(FontRole::Monospace);
        element.text_style.uppercase = true;
        element.text_background_style = TextBackgroundStyle::None;
    }
    for label in [&mut c.sector_name, &mut c.subsector_names] {
        label.text_style.rotation = 0.0;
        label.text_style.scale = crate::core::SizeF::UNIT;
    }
    c.lower_case_allegiance = false;
    Ok(c)
}

fn terminal_details(mut c: StyleConfig, _ctx: &ScaleContext) -> Result<StyleConfig> {
    c.world_details.remove(WorldDetails::TYPE | WorldDetails::ASTEROIDS);
    c.show_world_detail_colors = false;
    c.use_world_images = false;
    Ok(c)
}
