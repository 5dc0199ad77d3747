use crate::{math8::map8, oscillator::OscillatorKind};

/// Describes a portion of a palette
///
/// The range is walked from `begin` to `end` in the increasing direction,
/// wrapping through 255/0 when `end < begin`. `{0, 255}` is the whole
/// palette and `{0, 127}` its first half. `{127, 126}` is the whole palette
/// too, starting in the middle and going in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteRange {
    pub begin: u8,
    pub end: u8,
}

impl PaletteRange {
    pub const fn new(begin: u8, end: u8) -> Self {
        Self { begin, end }
    }

    /// The whole palette, `{0, 255}`
    pub const fn full() -> Self {
        Self::new(0, 255)
    }

    /// Distance walked from `begin` to `end`
    pub const fn width(self) -> u8 {
        self.end.wrapping_sub(self.begin)
    }
}

/// Moves a palette sub-range around with an oscillator
///
/// The range is centered on the oscillator output and extends `width` on
/// each side. Near the palette edges it wraps instead of clamping, so the
/// band crosses the 255/0 seam without special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteRangeController {
    /// Waveform driving the center of the range
    pub oscillator: OscillatorKind,
    /// Half-width of the range on each side of the center
    pub width: u8,
}

impl PaletteRangeController {
    pub const fn new(oscillator: OscillatorKind, width: u8) -> Self {
        Self { oscillator, width }
    }

    /// Range for the given time (phase) byte
    pub const fn range(self, time: u8) -> PaletteRange {
        let center = self.center(time);
        PaletteRange {
            begin: center.wrapping_sub(self.width),
            end: center.wrapping_add(self.width),
        }
    }

    const fn center(self, time: u8) -> u8 {
        self.oscillator.eval(time)
    }
}

/// Map a position inside `range` (0 = `begin`, 255 = `end`) to a palette index
#[inline]
pub const fn position_in_palette(range: PaletteRange, position_in_range: u8) -> u8 {
    map8(position_in_range, range.begin, range.end)
}
