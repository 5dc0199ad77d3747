//! 8-bit fixed-point helpers
//!
//! Integer-only math used by the render path. Everything here treats `u8` as
//! a 0.8 fixed-point fraction (0 = 0.0, 255 ~ 1.0) and wraps on purpose where
//! noted.

use embassy_time::{Duration, Instant};

/// Slope/offset table for [`sin8`], interleaved as `(b, m16)` per section.
const SIN8_SECTIONS: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Type alias for a function that adjusts a u8 value
pub type U8Adjuster = fn(value: u8) -> u8;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Map `position` (0-255) proportionally onto the arc `range_start..=range_end`
///
/// The arc is walked in the increasing direction, so `range_end < range_start`
/// wraps through the 255/0 seam instead of reversing.
#[inline]
pub const fn map8(position: u8, range_start: u8, range_end: u8) -> u8 {
    let range_width = range_end.wrapping_sub(range_start);
    scale8(position, range_width).wrapping_add(range_start)
}

/// Maps [0, 255] to [0, 255], just like x^4 maps [0, 1] to [0, 1]
///
/// Computed as `((x * x) * (x * x)) >> 24` in 32 bits, truncating. The
/// squared term is reused, so only two multiplications are needed.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn fourth_power(x: u8) -> u8 {
    let x = x as u32;
    let squared = x * x;
    ((squared * squared) >> 24) as u8
}

/// Remaps `i` from `[0, max_i - 1]` to `[0, 255]`
///
/// The product `i * (u32::MAX / max_i)` wraps modulo 2^32. Indices outside
/// `[0, max_i - 1]` are not clamped and go through the same formula.
///
/// # Panics
///
/// Panics if `max_i` is zero.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn map_32_to_8(i: u32, max_i: u32) -> u8 {
    let step = u32::MAX / max_i;
    (i.wrapping_mul(step) >> 24) as u8
}

/// Calculate progress (0-255) based on elapsed time and duration
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    if duration.as_millis() == 0 {
        return 0;
    }
    if elapsed.as_millis() >= duration.as_millis() {
        return 255;
    }

    ((elapsed.as_millis() * 255) / duration.as_millis()) as u8
}

/// Phase (0-255) of `now` within a repeating `period`
///
/// Unlike [`progress8`] this never saturates: the phase wraps back to 0 at
/// the start of every period. A zero period yields 0.
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub fn phase8(now: Instant, period: Duration) -> u8 {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return 0;
    }
    let position_ms = now.as_millis() % period_ms;

    ((u128::from(position_ms) * 256) / u128::from(period_ms)) as u8
}

/// Ease in out quadratic
#[allow(clippy::cast_possible_truncation)]
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Ease in out cubic (`3x^2 - 2x^3`)
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn ease_in_out_cubic(i: u8) -> u8 {
    let ii = scale8(i, i);
    let iii = scale8(ii, i);
    let r1 = 3 * (ii as u16) - 2 * (iii as u16);
    // r1 can overshoot to 256 near the top
    if r1 & 0x100 != 0 { 255 } else { r1 as u8 }
}

/// 8-bit sine approximation
///
/// One full cycle per 256 phase steps: `sin8(0) == 128`, `sin8(64) == 255`,
/// `sin8(128) == 128`, `sin8(192) == 1`. Piecewise linear over 4 sections per
/// quarter wave.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn sin8(theta: u8) -> u8 {
    let descending = theta & 0x40 != 0;

    let mut offset = if descending { 255 - theta } else { theta };
    offset &= 0x3F;

    let mut section_offset = offset & 0x0F;
    if descending {
        section_offset += 1;
    }

    let section = (offset >> 4) as usize;
    let base = SIN8_SECTIONS[section * 2];
    let slope = SIN8_SECTIONS[section * 2 + 1];

    let rise = (slope as u16 * section_offset as u16) >> 4;
    let mut y = rise as i16 + base as i16;
    if theta & 0x80 != 0 {
        y = -y;
    }

    (y + 128) as u8
}

/// Triangle wave: 0 at phase 0, 254 at phases 127/128, back to 0 at 255
pub const fn triwave8(phase: u8) -> u8 {
    let folded = if phase & 0x80 != 0 { 255 - phase } else { phase };
    folded << 1
}

/// Triangle wave with quadratic easing, close to a sine but cheaper
pub const fn quadwave8(phase: u8) -> u8 {
    ease_in_out_quad(triwave8(phase))
}

/// Triangle wave with cubic easing, spends more time at the extremes
pub const fn cubicwave8(phase: u8) -> u8 {
    ease_in_out_cubic(triwave8(phase))
}

/// Square wave: 255 while `phase < pulse_width`, 0 afterwards
///
/// A pulse width of 255 keeps the output high for the whole cycle.
pub const fn squarewave8(phase: u8, pulse_width: u8) -> u8 {
    if phase < pulse_width || pulse_width == 255 {
        255
    } else {
        0
    }
}
