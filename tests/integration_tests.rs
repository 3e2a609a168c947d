use starchart::prelude::*;

/// End-to-end checks of style resolution as a renderer would drive it.
#[cfg(test)]
mod integration_tests {
    use super::*;

    const SCALES: [f64; 14] = [
        1.0 / 128.0,
        1.0 / 32.0,
        0.25,
        0.5,
        1.0,
        2.0,
        4.0,
        8.0,
        16.0,
        24.0,
        48.0,
        96.0,
        256.0,
        1024.0,
    ];

    fn option_sets() -> [MapOptions; 5] {
        [
            MapOptions::empty(),
            MapOptions::DEFAULT_VIEW,
            MapOptions::all(),
            MapOptions::SECTORS_ALL | MapOptions::FORCE_HEXES,
            MapOptions::from_raw(0xFFFF_FFFF),
        ]
    }

    fn resolve(scale: f64, options: MapOptions, style: Style) -> StyleConfig {
        StyleConfig::resolve(scale, options, style).unwrap()
    }

    /// Two independent resolutions agree field for field and byte for byte.
    #[test]
    fn test_resolution_is_deterministic() {
        for style in Style::ALL {
            for scale in SCALES {
                for options in option_sets() {
                    let a = resolve(scale, options, style);
                    let b = resolve(scale, options, style);
                    assert_eq!(a, b);
                    assert_eq!(a.to_json(false).unwrap(), b.to_json(false).unwrap());
                }
            }
        }
    }

    /// Building font handles on one config does not make it differ from a fresh one.
    #[test]
    fn test_font_materialization_does_not_affect_equality() {
        let a = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Poster);
        let b = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Poster);
        let handle = a.worlds.font().unwrap();
        assert!(Arc::ptr_eq(&handle, &a.worlds.font().unwrap()));
        assert_eq!(a.worlds.built_font_count(), 1);
        assert_eq!(b.worlds.built_font_count(), 0);
        assert_eq!(a, b);
        assert_eq!(a.clone().worlds.built_font_count(), 0);
    }

    /// Editing a resolved element's font never leaves a handle built from the old descriptor.
    #[test]
    fn test_font_edit_after_resolution_rebuilds_handle() {
        let mut config = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Poster);
        let before = config.worlds.font().unwrap();
        assert_ne!(before.family, "Courier New");

        config.worlds.set_font_role(FontRole::Monospace);
        let after = config.worlds.font().unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.family, "Courier New");
        assert_eq!(after.em_size, before.em_size);
    }

    #[test]
    fn test_overlays_follow_world_visibility() {
        for style in Style::ALL {
            for scale in SCALES {
                let config = resolve(scale, MapOptions::DEFAULT_VIEW, style);
                let expected = config.worlds.visible;
                assert_eq!(config.population_overlay.visible, expected, "{style} at {scale}");
                assert_eq!(config.importance_overlay.visible, expected, "{style} at {scale}");
            }
        }
    }

    #[test]
    fn test_subsector_grid_visibility_is_monotonic() {
        for style in Style::ALL {
            for scale in SCALES {
                let with_bit = resolve(scale, MapOptions::SUBSECTOR_GRID, style);
                assert_eq!(with_bit.subsector_grid.visible, scale >= 8.0, "{style} at {scale}");

                let without_bit = resolve(scale, MapOptions::empty(), style);
                assert!(!without_bit.subsector_grid.visible, "{style} at {scale}");
            }
        }
    }

    #[test]
    fn test_interpolation_boundary_laws() {
        let (min_s, max_s) = (0.25, 4.0);
        assert_eq!(Interpolation::log_scale(0.0, 0.85, min_s, min_s, max_s), 0.0);
        assert_eq!(Interpolation::log_scale(0.0, 0.85, max_s, min_s, max_s), 0.85);
        assert_eq!(Interpolation::log_scale(0.0, 0.85, 0.01, min_s, max_s), 0.0);
        assert_eq!(Interpolation::log_scale(0.0, 0.85, 100.0, min_s, max_s), 0.85);
        assert_eq!(Interpolation::log_scale_rounded(3, 9, min_s, min_s, max_s), 3);
        assert_eq!(Interpolation::log_scale_rounded(3, 9, max_s, min_s, max_s), 9);

        let mut previous = 0.0;
        let mut scale = min_s;
        while scale <= max_s {
            let value = Interpolation::log_scale(0.0, 0.85, scale, min_s, max_s);
            assert!(value >= previous);
            previous = value;
            scale *= 1.1;
        }
    }

    #[test]
    fn test_detail_levels_partition_scales() {
        for scale in SCALES {
            let level = WorldDetailLevel::for_scale(scale);
            let expected = if scale < 4.0 {
                WorldDetailLevel::None
            } else if scale < 24.0 {
                WorldDetailLevel::Dotmap
            } else if scale < 48.0 {
                WorldDetailLevel::Atlas
            } else {
                WorldDetailLevel::Poster
            };
            assert_eq!(level, expected, "scale {scale}");
        }
        assert!(WorldDetails::POSTER.contains(WorldDetails::ATLAS));
        assert!(WorldDetails::POSTER.bits() > WorldDetails::ATLAS.bits());
    }

    /// Every visible stroked layer has a drawable pen for every input.
    #[test]
    fn test_visible_pens_are_positive() {
        for style in Style::ALL {
            for scale in SCALES {
                for options in option_sets() {
                    let config = resolve(scale, options, style);
                    for (name, element) in config.elements() {
                        if element.visible && element.has_stroke() {
                            let width = element.pen.width();
                            assert!(width > 0.0 && width.is_finite(), "{style}/{name} at {scale}");
                        }
                    }
                    assert!((0.0..=1.0).contains(&config.deep_background_opacity));
                    assert!((0.0..=1.0).contains(&config.rift_opacity));
                }
            }
        }
    }

    #[test]
    fn test_highlight_filters() {
        let world = |population: i32, atmosphere: i32| WorldProfile {
            starport: 'A',
            population,
            atmosphere,
            ..WorldProfile::default()
        };

        let p8 = HighlightPattern::parse("P8+").unwrap().unwrap();
        for population in 0..=15 {
            assert_eq!(p8.matches(&world(population, 0)), population >= 8);
        }
        let a49 = HighlightPattern::parse("A4-9").unwrap().unwrap();
        for atmosphere in 0..=15 {
            assert_eq!(a49.matches(&world(0, atmosphere)), (4..=9).contains(&atmosphere));
        }

        assert!(HighlightPattern::parse("st").is_err());
        assert_eq!(HighlightPattern::from_query("st"), None);
        assert_eq!(HighlightPattern::parse("").unwrap(), None);
        assert_eq!(HighlightPattern::from_query(""), None);
    }

    /// Zoomed far out with nothing switched on.
    #[test]
    fn test_scenario_galaxy_view_without_options() {
        println!("🧪 [TEST] scale 1, poster, no options");
        let config = resolve(1.0, MapOptions::empty(), Style::Poster);

        assert!(!config.subsector_grid.visible);
        assert!(!config.sector_grid.visible);
        assert_eq!(config.world_detail_level, WorldDetailLevel::None);
        assert!(config.world_details.is_empty());
        assert!(!config.worlds.visible);
        assert!(config.pseudo_random_stars.visible);
        assert!(!config.macro_borders.visible);
        assert!(!config.capitals.visible);

        // The sector grid has its own, lower threshold.
        let gridded = resolve(1.0, MapOptions::SECTOR_GRID, Style::Poster);
        assert!(gridded.sector_grid.visible);
        assert!(gridded.sector_grid.pen.color.a > 0);
        assert!(gridded.sector_grid.pen.color.a < 255);
    }

    #[test]
    fn test_scenario_poster_world_colors_and_uwp() {
        let options = MapOptions::DEFAULT_VIEW | MapOptions::WORLD_COLORS;

        let at_64 = resolve(64.0, options, Style::Poster);
        assert_eq!(at_64.world_detail_level, WorldDetailLevel::Poster);
        assert!(at_64.world_details.contains(WorldDetails::POSTER));
        assert!(!at_64.world_details.contains(WorldDetails::UWP));
        assert!(at_64.show_world_detail_colors);

        let at_96 = resolve(96.0, options, Style::Poster);
        assert!(at_96.world_details.contains(WorldDetails::UWP));
        assert_eq!(at_96.layout, GlyphLayout::POSTER.with_uwp_line());

        // Without the option bit the palette stays plain.
        let plain = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Poster);
        assert!(!plain.show_world_detail_colors);
    }

    #[test]
    fn test_scenario_candy_is_the_lossy_style() {
        for scale in [2.0, 64.0, 512.0] {
            let candy = resolve(scale, MapOptions::DEFAULT_VIEW, Style::Candy);
            assert_eq!(candy.preferred_format, ImageFormat::Jpeg);
            assert_eq!(candy.mime_type(), "image/jpeg");

            for style in Style::ALL.into_iter().filter(|s| *s != Style::Candy) {
                let other = resolve(scale, MapOptions::DEFAULT_VIEW, style);
                assert_eq!(other.preferred_format, ImageFormat::Png, "{style}");
                assert_ne!(other.background_color, candy.background_color, "{style}");
            }
        }
    }

    #[test]
    fn test_print_styles_drop_deep_background() {
        for style in [Style::Atlas, Style::Print, Style::Draft, Style::Fasa, Style::Terminal] {
            let config = resolve(0.25, MapOptions::DEFAULT_VIEW, style);
            assert_eq!(config.deep_background_opacity, 0.0, "{style}");
            assert!(!config.use_galaxy_image, "{style}");
        }
        let poster = resolve(0.25, MapOptions::DEFAULT_VIEW, Style::Poster);
        assert!(poster.deep_background_opacity > 0.0);
        assert!(poster.use_galaxy_image);
    }

    #[test]
    fn test_style_specific_overrides() {
        let fasa = resolve(32.0, MapOptions::DEFAULT_VIEW, Style::Fasa);
        assert_eq!(fasa.hex_style, HexStyle::Hex);
        assert_eq!(fasa.micro_border_style, MicroBorderStyle::Curve);
        assert_eq!(fasa.hex_coordinate_style, HexCoordinateStyle::Subsector);
        assert!(fasa.hex_number.visible);
        assert_eq!(fasa.worlds.descriptor(FontSlot::Normal).unwrap().role, FontRole::Serif);

        let terminal = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Terminal);
        assert_eq!(terminal.foreground_color, Color::CYAN);
        assert_eq!(terminal.worlds.text_color, Color::CYAN);
        assert!(terminal.worlds.text_style.uppercase);
        assert!(!terminal.world_details.contains(WorldDetails::TYPE));

        let draft = resolve(64.0, MapOptions::DEFAULT_VIEW, Style::Draft);
        assert!(draft.light_background);
        assert_eq!(draft.worlds.descriptor(FontSlot::Normal).unwrap().role, FontRole::Handwriting);
        assert!(!draft.world_details.contains(WorldDetails::ASTEROIDS));

        let candy = resolve(1024.0, MapOptions::DEFAULT_VIEW, Style::Candy);
        assert_eq!(candy.hex_content_scale, 0.5);
        assert!(candy.world_details.contains(WorldDetails::UWP));
        assert!(candy.use_world_images);
    }

    #[test]
    fn test_style_names_parse_case_insensitively() {
        assert_eq!("Atlas".parse::<Style>().unwrap(), Style::Atlas);
        assert!(matches!("glossy".parse::<Style>(), Err(Error::UnknownStyle(_))));
    }

    #[test]
    fn test_cache_returns_resolved_configs() {
        let cache = StyleCache::default();
        let cached = cache
            .get_or_resolve(48.0, MapOptions::DEFAULT_VIEW, Style::Print)
            .unwrap();
        assert_eq!(*cached, resolve(48.0, MapOptions::DEFAULT_VIEW, Style::Print));
        assert!(cache.contains(&StyleKey::new(48.0, MapOptions::DEFAULT_VIEW, Style::Print)));
    }
}
