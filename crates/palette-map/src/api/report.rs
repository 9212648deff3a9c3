//! Summary of one mapping run.

use crate::image::LuminanceRange;
use crate::matcher::QuantileMapping;

/// What a mapping run did to the image.
#[derive(Debug, Clone, PartialEq)]
pub struct MapReport {
    /// Mode name (`rgb`, `luminance`, `hsl` or `hybrid`)
    pub mode: &'static str,
    /// Number of palette entries
    pub palette_size: usize,
    /// Pixels in the image
    pub total: usize,
    /// Pixels recolored with a palette entry
    pub mapped: usize,
    /// Excluded (black or transparent) pixels left as they were
    pub skipped: usize,
    /// Pixels rewritten by the contrast stretch (0 when disabled)
    pub stretched: usize,
    /// Luminance range of the input
    pub initial_range: LuminanceRange,
    /// Luminance range the matcher used (after any stretch)
    pub final_range: LuminanceRange,
    /// Luminance range of the palette
    pub palette_range: LuminanceRange,
    /// The band table, for luminance-mode runs
    pub quantile: Option<QuantileMapping>,
}
