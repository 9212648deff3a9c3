//! Luminance quantile mapping.
//!
//! The sorted luminances of all mappable pixels are cut into `n` contiguous
//! runs of (nearly) equal population, `n` being the palette size. Each run's
//! upper bound becomes a threshold, and the runs are assigned to the palette
//! entries in ascending luminance order. The result is a step function from
//! pixel luminance to palette color that spreads the image evenly over the
//! palette's tones, whatever the source's histogram looks like.

use super::Matcher;
use crate::color::Rgb;
use crate::image::LuminanceRange;
use crate::palette::PaletteProfile;

/// Threshold used for every segment when the image has no mappable pixels:
/// one above the empty-image range maximum.
const EMPTY_IMAGE_THRESHOLD: f64 = LuminanceRange::FULL.max + 1.0;

/// One step of a [`QuantileMapping`]: pixels with luminance at or below
/// `threshold` (and above the previous step's) become `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileSegment {
    /// Inclusive upper luminance bound
    pub threshold: f64,
    /// Palette color assigned to this band
    pub color: Rgb,
}

/// Ascending `(threshold, color)` table, one segment per palette entry.
///
/// # Example
///
/// ```
/// use palette_map::{Matcher, Palette, PaletteProfile, QuantileMapping, Rgb};
///
/// let palette = Palette::from_hex(&["#FFFFFF", "#000000"]).unwrap();
/// let profile = PaletteProfile::new(&palette);
///
/// // Four pixels: the darker half goes to black, the brighter half to white
/// let mapping = QuantileMapping::build(&[10.0, 20.0, 30.0, 40.0], &profile);
/// assert_eq!(mapping.len(), 2);
/// assert_eq!(mapping.nearest(Rgb::new(20, 20, 20)), Rgb::new(0, 0, 0));
/// assert_eq!(mapping.nearest(Rgb::new(35, 35, 35)), Rgb::new(255, 255, 255));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileMapping {
    segments: Vec<QuantileSegment>,
    /// Brightest palette color, returned when no threshold matches
    fallback: Rgb,
}

impl QuantileMapping {
    /// Build the mapping from ascending image luminances.
    ///
    /// `sorted_luminances` must be sorted ascending. Palette entries are
    /// ordered by luminance with a stable sort, so entries of equal
    /// luminance keep their palette order.
    ///
    /// With `m` luminances and `n` palette entries, segment `i < n - 1` ends
    /// at `sorted_luminances[floor((i + 1) * m / n)]` and the last segment at
    /// `sorted_luminances[m - 1] + 1`, so every observed luminance falls in
    /// some segment. With no luminances at all, every threshold is
    /// `256.0`.
    pub fn build(sorted_luminances: &[f64], profile: &PaletteProfile) -> Self {
        let n = profile.len();
        let m = sorted_luminances.len();
        let luminances = profile.luminances();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| luminances[a].total_cmp(&luminances[b]));

        let segments: Vec<QuantileSegment> = order
            .iter()
            .enumerate()
            .map(|(i, &entry)| {
                let threshold = if m == 0 {
                    EMPTY_IMAGE_THRESHOLD
                } else if i == n - 1 {
                    sorted_luminances[m - 1] + 1.0
                } else {
                    let pos = ((i + 1) * m / n).min(m - 1);
                    sorted_luminances[pos]
                };
                QuantileSegment {
                    threshold,
                    color: profile.colors()[entry],
                }
            })
            .collect();

        let fallback = segments
            .last()
            .map(|s| s.color)
            .unwrap_or_default();

        Self { segments, fallback }
    }

    /// Segments in ascending threshold order.
    #[inline]
    pub fn segments(&self) -> &[QuantileSegment] {
        &self.segments
    }

    /// Number of segments (always the palette size).
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` only for a mapping built from an empty profile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the first segment whose threshold is `>= luminance`.
    pub fn segment_index(&self, luminance: f64) -> Option<usize> {
        self.segments.iter().position(|s| luminance <= s.threshold)
    }

    /// Palette color for a luminance value.
    ///
    /// Returns the brightest entry if the luminance lies above every
    /// threshold, which cannot happen for luminances the mapping was built
    /// from.
    #[inline]
    pub fn lookup(&self, luminance: f64) -> Rgb {
        match self.segment_index(luminance) {
            Some(idx) => self.segments[idx].color,
            None => self.fallback,
        }
    }
}

impl Matcher for QuantileMapping {
    #[inline]
    fn nearest(&self, color: Rgb) -> Rgb {
        self.lookup(color.luminance())
    }
}
