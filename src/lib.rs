#![no_std]

pub mod color;
pub mod effect;
pub mod filter;
pub mod math8;
pub mod oscillator;
pub mod palette;
pub mod renderer;
pub mod transition;

pub use effect::{EffectId, EffectSlot};
pub use filter::BrightnessFilterConfig;
pub use oscillator::{OscillatorKind, eval_oscillator};
pub use palette::{Palette, PaletteRange, PaletteRangeController, position_in_palette};
pub use renderer::{Renderer, RendererConfig};

pub use color::{Hsv, Rgb};
pub use math8::{U8Adjuster, fourth_power, map_32_to_8};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
