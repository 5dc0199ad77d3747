//! Oscillator waveforms
//!
//! Each waveform maps a phase byte (one full cycle per 256 steps) to an
//! output byte. Evaluation is total and side-effect free.

use crate::math8::{cubicwave8, quadwave8, sin8, squarewave8, triwave8};

const OSCILLATOR_NAME_SINE: &str = "sine";
const OSCILLATOR_NAME_TRIANGLE: &str = "triangle";
const OSCILLATOR_NAME_QUADRATIC: &str = "quadratic";
const OSCILLATOR_NAME_CUBIC: &str = "cubic";
const OSCILLATOR_NAME_SAWTOOTH: &str = "sawtooth";
const OSCILLATOR_NAME_REVERSE_SAWTOOTH: &str = "reverse_sawtooth";
const OSCILLATOR_NAME_SQUARE: &str = "square";

const OSCILLATOR_ID_SINE: u8 = 0;
const OSCILLATOR_ID_TRIANGLE: u8 = 1;
const OSCILLATOR_ID_QUADRATIC: u8 = 2;
const OSCILLATOR_ID_CUBIC: u8 = 3;
const OSCILLATOR_ID_SAWTOOTH: u8 = 4;
const OSCILLATOR_ID_REVERSE_SAWTOOTH: u8 = 5;
const OSCILLATOR_ID_SQUARE: u8 = 6;

/// Duty cycle of [`OscillatorKind::Square`], half of the period
const SQUARE_PULSE_WIDTH: u8 = 128;

/// Waveform shape selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum OscillatorKind {
    /// Smooth sine, centered on 128
    #[default]
    Sine = OSCILLATOR_ID_SINE,
    /// Linear up then down
    Triangle = OSCILLATOR_ID_TRIANGLE,
    /// Triangle with quadratic easing
    Quadratic = OSCILLATOR_ID_QUADRATIC,
    /// Triangle with cubic easing
    Cubic = OSCILLATOR_ID_CUBIC,
    /// Ramp up, then jump back to 0
    Sawtooth = OSCILLATOR_ID_SAWTOOTH,
    /// Ramp down, then jump back to 255
    ReverseSawtooth = OSCILLATOR_ID_REVERSE_SAWTOOTH,
    /// High for the first half of the cycle, low for the second
    Square = OSCILLATOR_ID_SQUARE,
}

impl OscillatorKind {
    /// Evaluate the waveform at `phase`
    pub const fn eval(self, phase: u8) -> u8 {
        match self {
            Self::Sine => sin8(phase),
            Self::Triangle => triwave8(phase),
            Self::Quadratic => quadwave8(phase),
            Self::Cubic => cubicwave8(phase),
            Self::Sawtooth => phase,
            Self::ReverseSawtooth => 255 - phase,
            Self::Square => squarewave8(phase, SQUARE_PULSE_WIDTH),
        }
    }

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            OSCILLATOR_ID_SINE => Self::Sine,
            OSCILLATOR_ID_TRIANGLE => Self::Triangle,
            OSCILLATOR_ID_QUADRATIC => Self::Quadratic,
            OSCILLATOR_ID_CUBIC => Self::Cubic,
            OSCILLATOR_ID_SAWTOOTH => Self::Sawtooth,
            OSCILLATOR_ID_REVERSE_SAWTOOTH => Self::ReverseSawtooth,
            OSCILLATOR_ID_SQUARE => Self::Square,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sine => OSCILLATOR_NAME_SINE,
            Self::Triangle => OSCILLATOR_NAME_TRIANGLE,
            Self::Quadratic => OSCILLATOR_NAME_QUADRATIC,
            Self::Cubic => OSCILLATOR_NAME_CUBIC,
            Self::Sawtooth => OSCILLATOR_NAME_SAWTOOTH,
            Self::ReverseSawtooth => OSCILLATOR_NAME_REVERSE_SAWTOOTH,
            Self::Square => OSCILLATOR_NAME_SQUARE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            OSCILLATOR_NAME_SINE => Some(Self::Sine),
            OSCILLATOR_NAME_TRIANGLE => Some(Self::Triangle),
            OSCILLATOR_NAME_QUADRATIC => Some(Self::Quadratic),
            OSCILLATOR_NAME_CUBIC => Some(Self::Cubic),
            OSCILLATOR_NAME_SAWTOOTH => Some(Self::Sawtooth),
            OSCILLATOR_NAME_REVERSE_SAWTOOTH => Some(Self::ReverseSawtooth),
            OSCILLATOR_NAME_SQUARE => Some(Self::Square),
            _ => None,
        }
    }
}

/// Evaluate oscillator `kind` at `phase`
#[inline]
pub const fn eval_oscillator(kind: OscillatorKind, phase: u8) -> u8 {
    kind.eval(phase)
}
