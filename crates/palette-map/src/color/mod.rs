//! Color types and distance primitives
//!
//! - [`Rgb`]: 8-bit color, with perceptual luminance
//! - [`Hsl`]: hue / lightness / saturation, derived from [`Rgb`]
//!
//! The free functions here are the building blocks every matcher is made of.
//!
//! # Example
//!
//! ```
//! use palette_map::color::{normalize, rgb_distance, Hsl, Rgb, MAX_RGB_DISTANCE};
//!
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! assert!((rgb_distance(black, white) - MAX_RGB_DISTANCE).abs() < 0.01);
//!
//! let hsl = Hsl::from(Rgb::new(255, 0, 0));
//! assert_eq!(hsl.hue, 0.0);
//!
//! assert_eq!(normalize(42.0, 10.0, 10.0), 0.5);
//! ```

mod hsl;
mod rgb;

pub use hsl::{hue_distance, Hsl};
pub use rgb::Rgb;

/// Euclidean distance between pure black and pure white, rounded.
///
/// Used to scale [`rgb_distance`] into roughly 0.0..=1.0.
pub const MAX_RGB_DISTANCE: f64 = 441.67;

/// Euclidean distance between two colors in RGB space.
#[inline]
pub fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Linearly map `value` from `lo..=hi` onto `0.0..=1.0`.
///
/// A degenerate range (`hi == lo`) yields `0.5` for every input.
#[inline]
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi == lo {
        return 0.5;
    }
    (value - lo) / (hi - lo)
}
