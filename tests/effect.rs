mod tests {
    use embassy_time::{Duration, Instant};
    use palette_range_driver::color::Rgb;
    use palette_range_driver::effect::{Effect, PaletteBandEffect, PulseEffect, StaticColorEffect};
    use palette_range_driver::{
        EffectId, OscillatorKind, Palette, PaletteRange, PaletteRangeController,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    // One phase step per millisecond
    const CYCLE: Duration = Duration::from_millis(256);

    #[test]
    fn test_effect_id_from_raw() {
        assert_eq!(EffectId::from_raw(0), Some(EffectId::Static));
        assert_eq!(EffectId::from_raw(1), Some(EffectId::PaletteBand));
        assert_eq!(EffectId::from_raw(2), Some(EffectId::Pulse));
        assert_eq!(EffectId::from_raw(3), None);
    }

    #[test]
    fn test_effect_id_names() {
        assert_eq!(EffectId::PaletteBand.as_str(), "palette_band");
        assert_eq!(
            EffectId::parse_from_str("palette_band"),
            Some(EffectId::PaletteBand)
        );
        assert_eq!(EffectId::parse_from_str("pulse"), Some(EffectId::Pulse));
        assert_eq!(EffectId::parse_from_str("static"), Some(EffectId::Static));
        assert_eq!(EffectId::parse_from_str("rainbow"), None);
    }

    #[test]
    fn test_effect_id_to_slot() {
        for id in [EffectId::Static, EffectId::PaletteBand, EffectId::Pulse] {
            assert_eq!(id.to_slot(RED).id(), id);
        }
    }

    #[test]
    fn test_palette_band_range_follows_oscillator() {
        let effect = PaletteBandEffect::new(
            Palette::rainbow(),
            PaletteRangeController::new(OscillatorKind::Sine, 32),
        )
        .with_cycle_duration(CYCLE);

        // sin8(64) == 255
        assert_eq!(
            effect.range_at(Instant::from_millis(64)),
            PaletteRange::new(223, 31)
        );
        // sin8(0) == 128
        assert_eq!(
            effect.range_at(Instant::from_millis(256)),
            PaletteRange::new(96, 160)
        );
    }

    #[test]
    fn test_palette_band_zero_width_fills_one_color() {
        let palette = Palette::from_colors(&[RED, BLUE]).unwrap();
        let mut effect = PaletteBandEffect::new(
            palette.clone(),
            PaletteRangeController::new(OscillatorKind::Sawtooth, 0),
        )
        .with_cycle_duration(CYCLE);

        let mut leds = [BLACK; 5];
        effect.render(Instant::from_millis(64), &mut leds);
        assert_eq!(leds, [palette.color_at(64); 5]);
    }

    #[test]
    fn test_palette_band_stretches_strip_over_range() {
        let palette = Palette::rainbow();
        let mut effect = PaletteBandEffect::new(
            palette.clone(),
            PaletteRangeController::new(OscillatorKind::Sawtooth, 64),
        )
        .with_cycle_duration(CYCLE);

        // Center 128, range {64, 192}
        let mut leds = [BLACK; 4];
        effect.render(Instant::from_millis(128), &mut leds);
        assert_eq!(
            leds,
            [
                palette.color_at(64),
                palette.color_at(95),
                palette.color_at(127),
                palette.color_at(160),
            ]
        );
    }

    #[test]
    fn test_palette_band_empty_strip() {
        let mut effect = PaletteBandEffect::default();
        let mut leds: [Rgb; 0] = [];
        effect.render(Instant::from_millis(10), &mut leds);
    }

    #[test]
    fn test_pulse_level_uses_fourth_power() {
        let square = PulseEffect::new(WHITE)
            .with_oscillator(OscillatorKind::Square)
            .with_cycle_duration(CYCLE);
        assert_eq!(square.level_at(Instant::from_millis(0)), 252);
        assert_eq!(square.level_at(Instant::from_millis(200)), 0);

        let sine = PulseEffect::new(WHITE).with_cycle_duration(CYCLE);
        // sin8(0) == 128
        assert_eq!(sine.level_at(Instant::from_millis(0)), 16);
    }

    #[test]
    fn test_pulse_render() {
        let mut effect = PulseEffect::new(WHITE)
            .with_oscillator(OscillatorKind::Square)
            .with_cycle_duration(CYCLE);

        let mut leds = [BLACK; 3];
        effect.render(Instant::from_millis(0), &mut leds);
        assert_eq!(
            leds,
            [Rgb {
                r: 252,
                g: 252,
                b: 252
            }; 3]
        );

        effect.render(Instant::from_millis(200), &mut leds);
        assert_eq!(leds, [BLACK; 3]);
    }

    #[test]
    fn test_static_color_transition() {
        let mut effect = StaticColorEffect::new(RED);
        let mut leds = [BLACK; 2];
        effect.render(Instant::from_millis(0), &mut leds);
        assert_eq!(leds, [RED; 2]);

        effect.set_color(BLUE, Duration::from_millis(100), Instant::from_millis(0));
        assert!(effect.is_transitioning());

        effect.render(Instant::from_millis(100), &mut leds);
        assert_eq!(leds, [BLUE; 2]);
        assert!(!effect.is_transitioning());
    }
}
