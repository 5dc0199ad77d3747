mod tests {
    use palette_range_driver::color::{Hsv, Rgb, hsv2rgb};
    use palette_range_driver::{
        OscillatorKind, Palette, PaletteRange, PaletteRangeController, eval_oscillator,
        position_in_palette,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_range_wraps_below_zero() {
        // Sawtooth makes the center equal to the time byte
        let controller = PaletteRangeController::new(OscillatorKind::Sawtooth, 5);
        assert_eq!(controller.range(2), PaletteRange::new(253, 7));
        assert_eq!(controller.range(252), PaletteRange::new(247, 1));
    }

    #[test]
    fn test_range_is_centered_on_oscillator() {
        let controller = PaletteRangeController::new(OscillatorKind::Sine, 20);
        for time in 0..=u8::MAX {
            let center = eval_oscillator(OscillatorKind::Sine, time);
            let range = controller.range(time);
            assert_eq!(range.begin, center.wrapping_sub(20));
            assert_eq!(range.end, center.wrapping_add(20));
        }
    }

    #[test]
    fn test_zero_width_range_is_center() {
        for kind in [
            OscillatorKind::Sine,
            OscillatorKind::Triangle,
            OscillatorKind::Square,
        ] {
            let controller = PaletteRangeController::new(kind, 0);
            for time in 0..=u8::MAX {
                let center = eval_oscillator(kind, time);
                assert_eq!(controller.range(time), PaletteRange::new(center, center));
            }
        }
    }

    #[test]
    fn test_half_palette_width_collapses_endpoints() {
        let controller = PaletteRangeController::new(OscillatorKind::Sawtooth, 128);
        let range = controller.range(0);
        assert_eq!(range, PaletteRange::new(128, 128));
        assert_eq!(range.width(), 0);
        for position in 0..=u8::MAX {
            assert_eq!(position_in_palette(range, position), 128);
        }
    }

    #[test]
    fn test_position_in_full_palette_is_identity() {
        let range = PaletteRange::full();
        for position in 0..=u8::MAX {
            assert_eq!(position_in_palette(range, position), position);
        }
    }

    #[test]
    fn test_position_in_palette_starting_in_the_middle() {
        let range = PaletteRange::new(127, 126);
        assert_eq!(range.width(), 255);
        assert_eq!(position_in_palette(range, 0), 127);
        assert_eq!(position_in_palette(range, 128), 255);
        assert_eq!(position_in_palette(range, 129), 0);
        assert_eq!(position_in_palette(range, 255), 126);
    }

    #[test]
    fn test_position_in_wrapping_range_walks_forward() {
        let range = PaletteRange::new(253, 7);
        assert_eq!(position_in_palette(range, 0), 253);
        assert_eq!(position_in_palette(range, 128), 2);
        assert_eq!(position_in_palette(range, 255), 7);

        let mut previous = 0;
        for position in 0..=u8::MAX {
            let offset = position_in_palette(range, position).wrapping_sub(253);
            assert!(offset <= range.width());
            assert!(offset >= previous);
            previous = offset;
        }
    }

    #[test]
    fn test_palette_rejects_empty_and_oversized() {
        assert_eq!(Palette::from_colors(&[]), None);
        assert_eq!(Palette::from_hex(&[]), None);
        assert_eq!(Palette::from_colors(&[RED; 17]), None);
        assert_eq!(Palette::from_colors(&[RED; 16]).map(|p| p.len()), Some(16));
    }

    #[test]
    fn test_palette_from_hex() {
        assert_eq!(
            Palette::from_hex(&[0xFF0000, 0x0000FF]),
            Palette::from_colors(&[RED, BLUE])
        );
    }

    #[test]
    fn test_palette_color_at_blends_and_wraps() {
        let palette = Palette::from_colors(&[RED, BLUE]).unwrap();
        assert_eq!(palette.color_at(0), RED);
        assert_eq!(palette.color_at(64), Rgb { r: 127, g: 0, b: 128 });
        assert_eq!(palette.color_at(128), BLUE);
        // Past the last stop the palette blends back towards the first
        assert_eq!(palette.color_at(192), Rgb { r: 128, g: 0, b: 127 });
    }

    #[test]
    fn test_single_stop_palette_is_flat() {
        let palette = Palette::from_colors(&[BLUE]).unwrap();
        for index in 0..=u8::MAX {
            assert_eq!(palette.color_at(index), BLUE);
        }
    }

    #[test]
    fn test_rainbow_palette() {
        let palette = Palette::rainbow();
        assert_eq!(palette.len(), 8);
        assert!(!palette.is_empty());
        assert_eq!(
            palette.color_at(0),
            hsv2rgb(Hsv {
                hue: 0,
                sat: 255,
                val: 255
            })
        );
        assert_eq!(
            palette.color_at(96),
            hsv2rgb(Hsv {
                hue: 96,
                sat: 255,
                val: 255
            })
        );
    }
}
