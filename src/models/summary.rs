//! Serializable views of engine results for `analyze` and `palette`.

use palette_map::{Hsl, LuminanceRange, MapReport, Palette, PaletteProfile};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSummary {
    pub min: f64,
    pub max: f64,
}

impl From<LuminanceRange> for RangeSummary {
    fn from(range: LuminanceRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSummary {
    /// Inclusive upper luminance bound of the band
    pub threshold: f64,
    pub color: String,
}

/// A [`MapReport`] flattened for printing or JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub mode: &'static str,
    pub palette_size: usize,
    pub total: usize,
    pub mapped: usize,
    pub skipped: usize,
    pub stretched: usize,
    pub initial_range: RangeSummary,
    pub final_range: RangeSummary,
    pub palette_range: RangeSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantile: Option<Vec<SegmentSummary>>,
}

impl From<&MapReport> for ReportSummary {
    fn from(report: &MapReport) -> Self {
        Self {
            mode: report.mode,
            palette_size: report.palette_size,
            total: report.total,
            mapped: report.mapped,
            skipped: report.skipped,
            stretched: report.stretched,
            initial_range: report.initial_range.into(),
            final_range: report.final_range.into(),
            palette_range: report.palette_range.into(),
            quantile: report.quantile.as_ref().map(|mapping| {
                mapping
                    .segments()
                    .iter()
                    .map(|s| SegmentSummary {
                        threshold: s.threshold,
                        color: s.color.to_string(),
                    })
                    .collect()
            }),
        }
    }
}

/// One palette entry with its derived color statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub index: usize,
    pub color: String,
    pub luminance: f64,
    /// Luminance normalized against the palette's own range
    pub normalized_luminance: f64,
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

/// Describe every palette entry, in palette order.
pub fn palette_entries(palette: &Palette) -> Vec<PaletteEntry> {
    let profile = PaletteProfile::new(palette);
    profile
        .colors()
        .iter()
        .enumerate()
        .map(|(index, &color)| {
            let hsl = Hsl::from(color);
            PaletteEntry {
                index,
                color: color.to_string(),
                luminance: profile.luminances()[index],
                normalized_luminance: profile.normalized_luminance(index),
                hue: hsl.hue,
                lightness: hsl.lightness,
                saturation: hsl.saturation,
            }
        })
        .collect()
}
