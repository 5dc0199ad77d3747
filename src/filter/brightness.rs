//! Global brightness with smooth fades

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Filter;
use crate::{
    color::{Rgb, scale_color},
    math8::{U8Adjuster, scale8},
    transition::ValueTransition,
};

/// Configuration for the brightness filter
#[derive(Debug, Clone, Copy)]
pub struct BrightnessFilterConfig {
    /// Lowest non-zero output brightness
    pub min_brightness: u8,
    /// Span above `min_brightness` that 255 maps to (0-255 = 0.0-1.0)
    pub scale: u8,
    /// Perceptual curve applied to the brightness before scaling pixels,
    /// e.g. [`crate::math8::fourth_power`]
    pub curve: Option<U8Adjuster>,
}

impl Default for BrightnessFilterConfig {
    fn default() -> Self {
        Self {
            min_brightness: 0,
            scale: 255,
            curve: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BrightnessFilter {
    min_brightness: u8,
    scale: u8,
    curve: Option<U8Adjuster>,
    brightness: ValueTransition<u8>,
}

impl BrightnessFilter {
    pub(crate) const fn new(brightness: u8, config: &BrightnessFilterConfig) -> Self {
        Self {
            min_brightness: config.min_brightness,
            scale: config.scale,
            curve: config.curve,
            brightness: ValueTransition::new_u8(brightness),
        }
    }

    /// Move to `brightness`, remapped into the configured range
    ///
    /// Zero always means off.
    pub(crate) fn set(&mut self, brightness: u8, duration: Duration, now: Instant) {
        let corrected = if brightness == 0 {
            0
        } else {
            scale8(brightness, self.scale).saturating_add(self.min_brightness)
        };
        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessFilter.set] brightness {} -> {}",
            brightness, corrected
        );
        self.brightness.set(corrected, duration, now);
    }

    /// Output brightness before the curve is applied
    pub(crate) const fn current(&self) -> u8 {
        self.brightness.current()
    }

    pub(crate) const fn is_transitioning(&self) -> bool {
        self.brightness.is_transitioning()
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        let mut level = self.brightness.current();
        if level == 255 {
            return;
        }
        if let Some(curve) = self.curve {
            level = curve(level);
        }
        for pixel in frame.iter_mut() {
            *pixel = scale_color(*pixel, level);
        }
    }

    fn tick(&mut self, now: Instant) {
        self.brightness.tick(now);
    }
}
