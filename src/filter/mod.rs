//! Frame post-processing
//!
//! Filters run after the effect has rendered a frame and before it is handed
//! to the output driver.

use embassy_time::Instant;

use crate::color::Rgb;

mod brightness;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);

    fn tick(&mut self, _now: Instant) {}
}

pub(crate) use brightness::BrightnessFilter;
pub use brightness::BrightnessFilterConfig;
