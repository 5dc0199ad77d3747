//! Palettes and moving palette ranges
//!
//! A [`Palette`] spreads up to [`MAX_PALETTE_STOPS`] colors evenly around a
//! circular 0-255 index space. [`PaletteRangeController`] selects the part of
//! that space an effect currently shows.

mod range;

use heapless::Vec;
pub use range::{PaletteRange, PaletteRangeController, position_in_palette};

use crate::color::{Hsv, Rgb, blend_colors, hsv2rgb, rgb_from_u32};

/// Maximum number of color stops in a palette
pub const MAX_PALETTE_STOPS: usize = 16;

const RAINBOW_STOPS: u8 = 8;
const RAINBOW_HUE_STEP: u8 = 32;

/// Circular color palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Never empty
    colors: Vec<Rgb, MAX_PALETTE_STOPS>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::rainbow()
    }
}

impl Palette {
    /// Create a palette from color stops
    ///
    /// Returns `None` if `colors` is empty or longer than
    /// [`MAX_PALETTE_STOPS`].
    pub fn from_colors(colors: &[Rgb]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let colors = Vec::from_slice(colors).ok()?;
        Some(Self { colors })
    }

    /// Create a palette from hex colors (0xRRGGBB format)
    pub fn from_hex(colors: &[u32]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let mut stops = Vec::new();
        for color in colors {
            stops.push(rgb_from_u32(*color)).ok()?;
        }
        Some(Self { colors: stops })
    }

    /// Full-saturation hue wheel
    pub fn rainbow() -> Self {
        let mut colors = Vec::new();
        for i in 0..RAINBOW_STOPS {
            let color = hsv2rgb(Hsv {
                hue: i * RAINBOW_HUE_STEP,
                sat: 255,
                val: 255,
            });
            // RAINBOW_STOPS fits in MAX_PALETTE_STOPS
            let _ = colors.push(color);
        }
        Self { colors }
    }

    /// Number of color stops
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false, a palette has at least one stop
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color stops in index order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Sample the palette at `index`
    ///
    /// Stop `k` of `n` sits at index `k * 256 / n`. Between stops the color is
    /// blended, and past the last stop it blends back into the first.
    #[allow(clippy::cast_possible_truncation)]
    pub fn color_at(&self, index: u8) -> Rgb {
        let len = self.colors.len();
        let scaled = u16::from(index) * (len as u16);
        let segment = usize::from(scaled >> 8);
        let next = (segment + 1) % len;
        let amount = (scaled & 0xFF) as u8;

        blend_colors(self.colors[segment], self.colors[next], amount)
    }
}
