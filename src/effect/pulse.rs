//! Pulsing single color
//!
//! The oscillator output goes through [`fourth_power`] so the pulse lingers
//! near dark and rises quickly to full, which reads as an even breath on
//! LEDs.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{
    color::{Rgb, scale_color},
    math8::{fourth_power, phase8},
    oscillator::{OscillatorKind, eval_oscillator},
    transition::ValueTransition,
};

const DEFAULT_CYCLE_MS: u64 = 4_000;

#[derive(Debug, Clone)]
pub struct PulseEffect {
    color: ValueTransition<Rgb>,
    oscillator: OscillatorKind,
    cycle_duration: Duration,
}

impl PulseEffect {
    pub fn new(color: Rgb) -> Self {
        Self {
            color: ValueTransition::new_rgb(color),
            oscillator: OscillatorKind::Sine,
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_MS),
        }
    }

    #[must_use]
    pub fn with_oscillator(mut self, oscillator: OscillatorKind) -> Self {
        self.oscillator = oscillator;
        self
    }

    #[must_use]
    pub fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    pub fn set_color(&mut self, color: Rgb, duration: Duration, now: Instant) {
        self.color.set(color, duration, now);
    }

    /// Intensity (0-255) of the pulse at `now`
    pub fn level_at(&self, now: Instant) -> u8 {
        let phase = phase8(now, self.cycle_duration);
        fourth_power(eval_oscillator(self.oscillator, phase))
    }
}

impl Effect for PulseEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        self.color.tick(now);

        let color = scale_color(self.color.current(), self.level_at(now));
        leds.fill(color);
    }

    fn is_transitioning(&self) -> bool {
        self.color.is_transitioning()
    }
}
