//! Palette band effect
//!
//! Shows a moving slice of a palette across the strip. The slice is chosen by
//! a [`PaletteRangeController`] whose center follows an oscillator, and the
//! strip is stretched over the slice from first to last LED.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{
    color::Rgb,
    math8::{map_32_to_8, phase8},
    oscillator::OscillatorKind,
    palette::{Palette, PaletteRange, PaletteRangeController, position_in_palette},
};

const DEFAULT_CYCLE_MS: u64 = 10_000;
const DEFAULT_WIDTH: u8 = 32;

#[derive(Debug, Clone)]
pub struct PaletteBandEffect {
    palette: Palette,
    controller: PaletteRangeController,
    /// Duration of one oscillator cycle
    cycle_duration: Duration,
}

impl Default for PaletteBandEffect {
    fn default() -> Self {
        Self::new(
            Palette::rainbow(),
            PaletteRangeController::new(OscillatorKind::Sine, DEFAULT_WIDTH),
        )
    }
}

impl PaletteBandEffect {
    pub fn new(palette: Palette, controller: PaletteRangeController) -> Self {
        Self {
            palette,
            controller,
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_MS),
        }
    }

    #[must_use]
    pub fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Palette range shown at `now`
    pub fn range_at(&self, now: Instant) -> PaletteRange {
        self.controller.range(phase8(now, self.cycle_duration))
    }
}

impl Effect for PaletteBandEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let range = self.range_at(now);
        let len = u32::try_from(leds.len()).unwrap_or(u32::MAX);

        for (i, led) in leds.iter_mut().enumerate() {
            let i = u32::try_from(i).unwrap_or(u32::MAX);
            let index = position_in_palette(range, map_32_to_8(i, len));
            *led = self.palette.color_at(index);
        }
    }
}
