//! Static color fill effect

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::{color::Rgb, transition::ValueTransition};

/// Fills all LEDs with one color, crossfading on color changes
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: ValueTransition<Rgb>,
}

impl StaticColorEffect {
    pub fn new(color: Rgb) -> Self {
        Self {
            color: ValueTransition::new_rgb(color),
        }
    }

    pub fn set_color(&mut self, color: Rgb, duration: Duration, now: Instant) {
        self.color.set(color, duration, now);
    }
}

impl Effect for StaticColorEffect {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        self.color.tick(now);
        leds.fill(self.color.current());
    }

    fn is_transitioning(&self) -> bool {
        self.color.is_transitioning()
    }
}
