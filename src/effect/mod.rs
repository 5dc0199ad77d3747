//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod palette_band;
mod pulse;
mod static_color;

use embassy_time::{Duration, Instant};
pub use palette_band::PaletteBandEffect;
pub use pulse::PulseEffect;
pub use static_color::StaticColorEffect;

use crate::color::Rgb;

const EFFECT_NAME_STATIC: &str = "static";
const EFFECT_NAME_PALETTE_BAND: &str = "palette_band";
const EFFECT_NAME_PULSE: &str = "pulse";

const EFFECT_ID_STATIC: u8 = 0;
const EFFECT_ID_PALETTE_BAND: u8 = 1;
const EFFECT_ID_PULSE: u8 = 2;

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}

    /// Check if the effect is transitioning
    fn is_transitioning(&self) -> bool {
        false
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Static single color effect
    Static(StaticColorEffect),
    /// Oscillating slice of a palette
    PaletteBand(PaletteBandEffect),
    /// Single color pulsing with an oscillator
    Pulse(PulseEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Static = EFFECT_ID_STATIC,
    PaletteBand = EFFECT_ID_PALETTE_BAND,
    Pulse = EFFECT_ID_PULSE,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::PaletteBand(PaletteBandEffect::default())
    }
}

impl EffectId {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_STATIC => Self::Static,
            EFFECT_ID_PALETTE_BAND => Self::PaletteBand,
            EFFECT_ID_PULSE => Self::Pulse,
            _ => return None,
        })
    }

    /// Build the effect with its default settings
    pub fn to_slot(self, color: Rgb) -> EffectSlot {
        match self {
            Self::Static => EffectSlot::Static(StaticColorEffect::new(color)),
            Self::PaletteBand => EffectSlot::PaletteBand(PaletteBandEffect::default()),
            Self::Pulse => EffectSlot::Pulse(PulseEffect::new(color)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => EFFECT_NAME_STATIC,
            Self::PaletteBand => EFFECT_NAME_PALETTE_BAND,
            Self::Pulse => EFFECT_NAME_PULSE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_STATIC => Some(Self::Static),
            EFFECT_NAME_PALETTE_BAND => Some(Self::PaletteBand),
            EFFECT_NAME_PULSE => Some(Self::Pulse),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Static(effect) => effect.render(now, leds),
            Self::PaletteBand(effect) => effect.render(now, leds),
            Self::Pulse(effect) => effect.render(now, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Static(effect) => Effect::reset(effect),
            Self::PaletteBand(effect) => Effect::reset(effect),
            Self::Pulse(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Static(_) => EffectId::Static,
            Self::PaletteBand(_) => EffectId::PaletteBand,
            Self::Pulse(_) => EffectId::Pulse,
        }
    }

    /// Update the color of the current effect with optional transition.
    ///
    /// Palette effects ignore the color.
    pub fn set_color(&mut self, color: Rgb, duration: Duration, now: Instant) {
        match self {
            Self::Static(effect) => effect.set_color(color, duration, now),
            Self::Pulse(effect) => effect.set_color(color, duration, now),
            Self::PaletteBand(_) => {}
        }
    }

    pub fn is_transitioning(&self) -> bool {
        match self {
            Self::Static(effect) => effect.is_transitioning(),
            Self::Pulse(effect) => effect.is_transitioning(),
            Self::PaletteBand(_) => false,
        }
    }
}
