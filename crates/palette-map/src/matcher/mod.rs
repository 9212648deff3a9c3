//! Palette matching strategies.
//!
//! Four strategies decide which palette entry replaces a pixel:
//!
//! | Mode | Matcher | Scores by |
//! |------|---------|-----------|
//! | [`MappingMode::Rgb`] | [`RgbMatcher`] | Euclidean RGB distance |
//! | [`MappingMode::Luminance`] | [`QuantileMapping`] | equal-population luminance bands |
//! | [`MappingMode::Hsl`] | [`HslMatcher`] | circular hue distance + normalized luminance |
//! | [`MappingMode::Hybrid`] | [`HybridMatcher`] | normalized RGB distance + normalized luminance |
//!
//! All of them implement [`Matcher`]. A [`Strategy`] is built once per run
//! from the mode and the frozen palette/image statistics; the per-pixel loop
//! is then instantiated for the concrete matcher, so there is no per-pixel
//! mode dispatch.
//!
//! Every score-minimizing matcher breaks ties in favour of the earliest
//! palette entry.

mod hsl;
mod hybrid;
mod quantile;
mod rgb;

use std::fmt;
use std::str::FromStr;

pub use hsl::HslMatcher;
pub use hybrid::HybridMatcher;
pub use quantile::{QuantileMapping, QuantileSegment};
pub use rgb::RgbMatcher;

use crate::color::Rgb;
use crate::image::LuminanceRange;
use crate::palette::PaletteProfile;

/// Default hue weight for [`MappingMode::Hsl`].
pub const DEFAULT_HUE_WEIGHT: f64 = 0.7;
/// Default luminance weight for [`MappingMode::Hsl`].
pub const DEFAULT_LUMINANCE_WEIGHT: f64 = 0.3;
/// Default color weight for [`MappingMode::Hybrid`].
pub const DEFAULT_COLOR_WEIGHT: f64 = 0.5;

/// Picks the palette color for one mappable pixel.
///
/// Implementations are pure functions of the pixel color and their frozen
/// tables, which is what lets the rewrite pass run in any order.
pub trait Matcher {
    /// Return the palette color that replaces `color`.
    fn nearest(&self, color: Rgb) -> Rgb;
}

/// How pixels are matched to palette entries.
///
/// # Example
///
/// ```
/// use palette_map::MappingMode;
///
/// let mode: MappingMode = "hsl".parse().unwrap();
/// assert_eq!(mode, MappingMode::Hsl { hue_weight: 0.7, luminance_weight: 0.3 });
/// assert_eq!(mode.name(), "hsl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MappingMode {
    /// Nearest palette color by Euclidean RGB distance.
    ///
    /// Metric-faithful, but blind to brightness structure in near-monochrome
    /// palettes.
    Rgb,

    /// Luminance quantile mapping.
    ///
    /// The image's mappable luminances are split into as many
    /// equal-population bands as there are palette entries; band *i* (dark to
    /// bright) maps to the *i*-th darkest palette color. Built for
    /// near-monochrome palettes where only tonal banding matters.
    #[default]
    Luminance,

    /// Hue-aware matching for multi-hue palettes.
    ///
    /// Score: `hue_weight * 2 * hue_distance + luminance_weight * |dL|`,
    /// where pixel luminance is normalized against the image range and entry
    /// luminance against the palette range.
    Hsl {
        /// Weight of the (doubled) circular hue distance
        hue_weight: f64,
        /// Weight of the normalized luminance difference
        luminance_weight: f64,
    },

    /// Linear blend of RGB distance and luminance difference.
    ///
    /// Score: `color_weight * rgb_distance / 441.67 + (1 - color_weight) * |dL|`.
    Hybrid {
        /// Weight of the normalized RGB distance, 0.0..=1.0
        color_weight: f64,
    },
}

impl MappingMode {
    /// [`MappingMode::Hsl`] with the default weights.
    pub const fn hsl() -> Self {
        MappingMode::Hsl {
            hue_weight: DEFAULT_HUE_WEIGHT,
            luminance_weight: DEFAULT_LUMINANCE_WEIGHT,
        }
    }

    /// [`MappingMode::Hybrid`] with the default color weight.
    pub const fn hybrid() -> Self {
        MappingMode::Hybrid {
            color_weight: DEFAULT_COLOR_WEIGHT,
        }
    }

    /// Short lowercase name: `rgb`, `luminance`, `hsl` or `hybrid`.
    pub fn name(&self) -> &'static str {
        match self {
            MappingMode::Rgb => "rgb",
            MappingMode::Luminance => "luminance",
            MappingMode::Hsl { .. } => "hsl",
            MappingMode::Hybrid { .. } => "hybrid",
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mapping mode {:?} (expected rgb, luminance, hsl or hybrid)",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for MappingMode {
    type Err = ParseModeError;

    /// Parse a mode name (case-insensitive). Weighted modes get the default
    /// weights.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            m if m.eq_ignore_ascii_case("rgb") => Ok(MappingMode::Rgb),
            m if m.eq_ignore_ascii_case("luminance") => Ok(MappingMode::Luminance),
            m if m.eq_ignore_ascii_case("hsl") => Ok(MappingMode::hsl()),
            m if m.eq_ignore_ascii_case("hybrid") => Ok(MappingMode::hybrid()),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// The matcher for one run, with its precomputed tables.
///
/// Exactly one variant per [`MappingMode`].
#[derive(Debug, Clone)]
pub enum Strategy<'a> {
    /// See [`RgbMatcher`]
    Rgb(RgbMatcher<'a>),
    /// See [`QuantileMapping`]
    Luminance(QuantileMapping),
    /// See [`HslMatcher`]
    Hsl(HslMatcher<'a>),
    /// See [`HybridMatcher`]
    Hybrid(HybridMatcher<'a>),
}

impl<'a> Strategy<'a> {
    /// Build the strategy for `mode`.
    ///
    /// * `profile` - palette statistics for this run
    /// * `image_range` - luminance range of the image as it will be matched
    ///   (after any contrast stretch)
    /// * `sorted_luminances` - ascending mappable luminances; only consulted
    ///   for [`MappingMode::Luminance`], so it is produced lazily
    pub fn build<F>(
        mode: MappingMode,
        profile: &'a PaletteProfile,
        image_range: LuminanceRange,
        sorted_luminances: F,
    ) -> Self
    where
        F: FnOnce() -> Vec<f64>,
    {
        match mode {
            MappingMode::Rgb => Strategy::Rgb(RgbMatcher::new(profile)),
            MappingMode::Luminance => {
                Strategy::Luminance(QuantileMapping::build(&sorted_luminances(), profile))
            }
            MappingMode::Hsl {
                hue_weight,
                luminance_weight,
            } => Strategy::Hsl(HslMatcher::new(
                profile,
                image_range,
                hue_weight,
                luminance_weight,
            )),
            MappingMode::Hybrid { color_weight } => {
                Strategy::Hybrid(HybridMatcher::new(profile, image_range, color_weight))
            }
        }
    }

    /// Name of the mode this strategy implements.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Rgb(_) => "rgb",
            Strategy::Luminance(_) => "luminance",
            Strategy::Hsl(_) => "hsl",
            Strategy::Hybrid(_) => "hybrid",
        }
    }

    /// The quantile table, for [`MappingMode::Luminance`] runs.
    pub fn quantile_mapping(&self) -> Option<&QuantileMapping> {
        match self {
            Strategy::Luminance(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl Matcher for Strategy<'_> {
    /// Per-call dispatch. The mapping pipeline matches on the variant once
    /// and runs the concrete matcher instead; this impl is for one-off
    /// lookups.
    fn nearest(&self, color: Rgb) -> Rgb {
        match self {
            Strategy::Rgb(m) => m.nearest(color),
            Strategy::Luminance(m) => m.nearest(color),
            Strategy::Hsl(m) => m.nearest(color),
            Strategy::Hybrid(m) => m.nearest(color),
        }
    }
}

/// Index of the smallest score; the first one wins ties.
///
/// Falls back to 0 when every score is NaN.
#[inline]
pub(crate) fn first_minimum(scores: impl IntoIterator<Item = f64>) -> usize {
    let mut best = 0;
    let mut best_score = f64::INFINITY;
    for (i, score) in scores.into_iter().enumerate() {
        if score < best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn test_first_minimum_prefers_earliest() {
        assert_eq!(first_minimum([3.0, 1.0, 1.0, 2.0]), 1);
        assert_eq!(first_minimum([0.5]), 0);
        assert_eq!(first_minimum([f64::NAN, f64::NAN]), 0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("RGB".parse::<MappingMode>(), Ok(MappingMode::Rgb));
        assert_eq!(" luminance ".parse::<MappingMode>(), Ok(MappingMode::Luminance));
        assert_eq!(
            "Hybrid".parse::<MappingMode>(),
            Ok(MappingMode::Hybrid { color_weight: 0.5 })
        );
        assert_eq!(
            "lab".parse::<MappingMode>(),
            Err(ParseModeError("lab".to_string()))
        );
    }

    #[test]
    fn test_strategy_matches_mode() {
        let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
        let profile = PaletteProfile::new(&palette);
        let range = LuminanceRange::FULL;

        for mode in [
            MappingMode::Rgb,
            MappingMode::Luminance,
            MappingMode::hsl(),
            MappingMode::hybrid(),
        ] {
            let strategy = Strategy::build(mode, &profile, range, || vec![10.0, 200.0]);
            assert_eq!(strategy.name(), mode.name());
            assert_eq!(
                strategy.quantile_mapping().is_some(),
                mode == MappingMode::Luminance
            );
        }
    }

    #[test]
    fn test_sorted_luminances_only_collected_for_quantile_mode() {
        let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
        let profile = PaletteProfile::new(&palette);

        let strategy = Strategy::build(MappingMode::Rgb, &profile, LuminanceRange::FULL, || {
            panic!("luminances collected for rgb mode")
        });
        assert_eq!(strategy.nearest(Rgb::new(250, 250, 250)), Rgb::new(255, 255, 255));
    }
}
