//! Optional image preprocessing run before matching.
//!
//! Currently a single pass: [`contrast_stretch`], which spreads a narrow
//! luminance range (dim or washed-out sources) toward the full 0..=255 span
//! so that tonal matchers have more room to discriminate.

mod stretch;

pub use stretch::contrast_stretch;
