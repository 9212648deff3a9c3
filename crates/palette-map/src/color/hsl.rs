//! Hue / lightness / saturation representation
//!
//! The conversion follows the classic HLS model on channels normalized to
//! 0.0..=1.0. Hue is circular: 0.0 and 1.0 are the same red.

use super::rgb::Rgb;

/// A color in HSL space, every component in 0.0..=1.0.
///
/// Achromatic colors (r == g == b) have `hue == 0.0` and `saturation == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle as a fraction of a full turn, in 0.0..1.0
    pub hue: f64,
    /// Lightness, `(max + min) / 2`
    pub lightness: f64,
    /// Saturation
    pub saturation: f64,
}

impl From<Rgb> for Hsl {
    fn from(color: Rgb) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;
        let lightness = sum / 2.0;

        if range == 0.0 {
            return Self {
                hue: 0.0,
                lightness,
                saturation: 0.0,
            };
        }

        let saturation = if lightness <= 0.5 {
            range / sum
        } else {
            range / (2.0 - sum)
        };

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;
        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self {
            hue: (sector / 6.0).rem_euclid(1.0),
            lightness,
            saturation,
        }
    }
}

/// Circular distance between two hues, in 0.0..=0.5.
///
/// # Example
/// ```
/// use palette_map::color::hue_distance;
/// assert_eq!(hue_distance(0.3, 0.3), 0.0);
/// assert!((hue_distance(0.1, 0.9) - 0.2).abs() < 1e-12);
/// ```
#[inline]
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs();
    diff.min(1.0 - diff)
}
