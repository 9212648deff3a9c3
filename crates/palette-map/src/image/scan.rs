//! Whole-image scans: pixel classification and luminance statistics.
//!
//! Every scan here skips *excluded* pixels, i.e. pixels that are too
//! transparent or too close to black to be recolored. The same
//! [`Thresholds`] value must be used for every scan of one mapping run so
//! that all stages agree on which pixels are mappable.

use super::buffer::{Rgba, RgbaBuffer};
use crate::color::normalize;

/// Exclusion thresholds for one mapping run.
///
/// A pixel is excluded when `alpha < alpha` or `r + g + b < black`.
///
/// # Example
///
/// ```
/// use palette_map::{Rgba, Thresholds};
///
/// let thresholds = Thresholds::new(30, 10);
/// assert!(thresholds.is_excluded(Rgba::new(5, 5, 5, 255)));
/// assert!(thresholds.is_excluded(Rgba::new(200, 200, 200, 5)));
/// assert!(!thresholds.is_excluded(Rgba::new(10, 10, 10, 255)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Channel sum below which a pixel counts as black (0..=765).
    pub black: u16,
    /// Alpha below which a pixel counts as transparent.
    pub alpha: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            black: 30,
            alpha: 10,
        }
    }
}

impl Thresholds {
    /// Create thresholds from a black channel-sum limit and an alpha limit.
    #[inline]
    pub const fn new(black: u16, alpha: u8) -> Self {
        Self { black, alpha }
    }

    /// Thresholds that exclude nothing.
    #[inline]
    pub const fn none() -> Self {
        Self { black: 0, alpha: 0 }
    }

    /// `true` if `pixel` is black-or-transparent and must be left alone.
    #[inline]
    pub fn is_excluded(&self, pixel: Rgba) -> bool {
        pixel.a < self.alpha || pixel.rgb().channel_sum() < self.black
    }
}

/// `(min, max)` luminance pair.
///
/// `min == max` is a valid, degenerate range: normalizing against it yields
/// `0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceRange {
    /// Darkest luminance observed
    pub min: f64,
    /// Brightest luminance observed
    pub max: f64,
}

impl LuminanceRange {
    /// The full 8-bit span, also used when an image has no mappable pixels.
    pub const FULL: Self = Self {
        min: 0.0,
        max: 255.0,
    };

    /// Create a range.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` when `min == max`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// `max - min`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map `value` onto 0.0..=1.0 relative to this range.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }
}

/// Luminance of every mappable pixel, in scan order.
fn mappable_luminances(
    image: &RgbaBuffer,
    thresholds: Thresholds,
) -> impl Iterator<Item = f64> + '_ {
    image
        .pixels()
        .iter()
        .filter(move |&&px| !thresholds.is_excluded(px))
        .map(|px| px.rgb().luminance())
}

/// Darkest and brightest luminance among mappable pixels.
///
/// Returns [`LuminanceRange::FULL`] when no pixel qualifies.
pub fn analyze_luminance_range(image: &RgbaBuffer, thresholds: Thresholds) -> LuminanceRange {
    mappable_luminances(image, thresholds)
        .fold(None, |acc: Option<LuminanceRange>, lum| match acc {
            None => Some(LuminanceRange::new(lum, lum)),
            Some(r) => Some(LuminanceRange::new(r.min.min(lum), r.max.max(lum))),
        })
        .unwrap_or(LuminanceRange::FULL)
}

/// Luminances of all mappable pixels, sorted ascending.
pub fn collect_sorted_luminances(image: &RgbaBuffer, thresholds: Thresholds) -> Vec<f64> {
    let mut luminances: Vec<f64> = mappable_luminances(image, thresholds).collect();
    luminances.sort_by(f64::total_cmp);
    luminances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(pixels: &[Rgba]) -> RgbaBuffer {
        RgbaBuffer::from_pixels(pixels.len(), 1, pixels.to_vec()).unwrap()
    }

    #[test]
    fn test_exclusion_rules() {
        let t = Thresholds::new(30, 10);

        // sum = 15 < 30
        assert!(t.is_excluded(Rgba::new(5, 5, 5, 255)));
        // sum == threshold is not black
        assert!(!t.is_excluded(Rgba::new(10, 10, 10, 255)));
        // transparent regardless of color
        assert!(t.is_excluded(Rgba::new(200, 200, 200, 5)));
        assert!(!t.is_excluded(Rgba::new(200, 200, 200, 10)));
    }

    #[test]
    fn test_black_threshold_above_255_uses_full_sum() {
        let t = Thresholds::new(700, 0);
        assert!(t.is_excluded(Rgba::new(230, 230, 230, 255)));
        assert!(!t.is_excluded(Rgba::new(240, 240, 240, 255)));
    }

    #[test]
    fn test_range_skips_excluded() {
        let img = image(&[
            Rgba::new(0, 0, 0, 255),       // black, excluded
            Rgba::new(100, 100, 100, 255), // lum 100
            Rgba::new(250, 250, 250, 0),   // transparent, excluded
            Rgba::new(50, 50, 50, 255),    // lum 50
        ]);

        let range = analyze_luminance_range(&img, Thresholds::default());
        assert!((range.min - 50.0).abs() < 1e-9);
        assert!((range.max - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_without_mappable_pixels_is_full() {
        let img = image(&[Rgba::new(0, 0, 0, 255), Rgba::new(9, 9, 9, 0)]);
        assert_eq!(
            analyze_luminance_range(&img, Thresholds::default()),
            LuminanceRange::FULL
        );

        let empty = RgbaBuffer::new(0, 0, Rgba::default());
        assert_eq!(
            analyze_luminance_range(&empty, Thresholds::default()),
            LuminanceRange::FULL
        );
    }

    #[test]
    fn test_sorted_luminances() {
        let img = image(&[
            Rgba::new(200, 200, 200, 255),
            Rgba::new(0, 0, 0, 255),
            Rgba::new(40, 40, 40, 255),
            Rgba::new(120, 120, 120, 255),
        ]);

        let lums = collect_sorted_luminances(&img, Thresholds::default());
        assert_eq!(lums.len(), 3);
        assert!(lums.windows(2).all(|w| w[0] <= w[1]));
        assert!((lums[0] - 40.0).abs() < 1e-9);
    }
}
