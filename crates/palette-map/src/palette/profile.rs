//! Per-run palette precomputation.

use super::palette::Palette;
use crate::color::Rgb;
use crate::image::LuminanceRange;

/// Read-only data derived from a [`Palette`] once per mapping run.
///
/// Holds the colors in palette order alongside their luminances and the
/// luminance span of the whole palette, so matchers never recompute them
/// per pixel.
#[derive(Debug, Clone)]
pub struct PaletteProfile {
    colors: Vec<Rgb>,
    luminances: Vec<f64>,
    range: LuminanceRange,
}

impl PaletteProfile {
    /// Compute the profile for `palette`.
    pub fn new(palette: &Palette) -> Self {
        let colors = palette.colors().to_vec();
        let luminances: Vec<f64> = colors.iter().map(|c| c.luminance()).collect();

        // Palette is non-empty, so the folds always see at least one value
        let min = luminances.iter().copied().fold(f64::INFINITY, f64::min);
        let max = luminances.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            colors,
            luminances,
            range: LuminanceRange::new(min, max),
        }
    }

    /// Number of palette entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; see [`Palette::is_empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette colors in their original order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Luminance of every entry, parallel to [`colors`](Self::colors).
    #[inline]
    pub fn luminances(&self) -> &[f64] {
        &self.luminances
    }

    /// `(min, max)` luminance across the palette.
    #[inline]
    pub fn range(&self) -> LuminanceRange {
        self.range
    }

    /// Luminance of entry `idx`, normalized against the palette range.
    #[inline]
    pub fn normalized_luminance(&self, idx: usize) -> f64 {
        self.range.normalize(self.luminances[idx])
    }
}
