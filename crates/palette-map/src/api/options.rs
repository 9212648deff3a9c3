//! Mapping configuration.

use crate::image::Thresholds;
use crate::matcher::MappingMode;

/// Configuration for one mapping run.
///
/// Every value the pipeline reads is carried here; nothing is read from
/// process-wide state.
///
/// # Defaults
///
/// - Mode: [`MappingMode::Luminance`]
/// - Thresholds: black 30, alpha 10
/// - Contrast stretch: disabled
///
/// # Example
///
/// ```
/// use palette_map::{MapOptions, MappingMode};
///
/// let options = MapOptions::new()
///     .mode(MappingMode::Hybrid { color_weight: 0.6 })
///     .black_threshold(45)
///     .contrast_stretch(true);
///
/// assert_eq!(options.thresholds.black, 45);
/// assert_eq!(options.thresholds.alpha, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapOptions {
    /// Matching strategy and its weights.
    pub mode: MappingMode,

    /// Which pixels are left untouched.
    pub thresholds: Thresholds,

    /// Stretch the image's luminance range before matching.
    pub contrast_stretch: bool,
}

impl MapOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matching mode.
    #[inline]
    pub fn mode(mut self, mode: MappingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set both exclusion thresholds.
    #[inline]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the black threshold (channel sum, 0..=765).
    #[inline]
    pub fn black_threshold(mut self, threshold: u16) -> Self {
        self.thresholds.black = threshold;
        self
    }

    /// Set the alpha threshold.
    #[inline]
    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.thresholds.alpha = threshold;
        self
    }

    /// Enable or disable the contrast stretch pre-pass.
    #[inline]
    pub fn contrast_stretch(mut self, enabled: bool) -> Self {
        self.contrast_stretch = enabled;
        self
    }
}
