//! PaletteMapper builder -- the primary entry point for the crate.
//!
//! [`PaletteMapper`] owns a parsed [`Palette`] and a [`MapOptions`] and runs
//! the full mapping pipeline over a borrowed [`RgbaBuffer`].

use tracing::{debug, info, trace};

use super::error::MapError;
use super::options::MapOptions;
use super::report::MapReport;
use crate::image::{
    analyze_luminance_range, collect_sorted_luminances, Rgba, RgbaBuffer, Thresholds,
};
use crate::matcher::{MappingMode, Matcher, Strategy};
use crate::palette::{Palette, PaletteProfile};
use crate::preprocess::contrast_stretch;

/// Maps images onto a fixed palette.
///
/// # Pipeline
///
/// [`map()`](Self::map) runs five stages, each finished before the next
/// starts:
///
/// 1. The palette is already parsed (construction fails on bad input, so no
///    pixel is ever touched by a run with an invalid palette)
/// 2. Analyze the luminance range of the mappable pixels
/// 3. If enabled, contrast-stretch, then analyze the range again
/// 4. Build the palette profile and the mode's [`Strategy`]
/// 5. Rewrite every mappable pixel with its matched color, keeping alpha
///
/// The mapper holds no per-run state, so one instance can map any number of
/// images.
///
/// # Example
///
/// ```
/// use palette_map::{MappingMode, PaletteMapper, Rgba, RgbaBuffer};
///
/// let mapper = PaletteMapper::from_hex(&["#000000", "#808080", "#FFFFFF"])
///     .unwrap()
///     .mode(MappingMode::Rgb);
///
/// let mut image = RgbaBuffer::new(2, 1, Rgba::new(10, 10, 10, 255));
/// image.set(1, 0, Rgba::new(200, 200, 200, 128));
///
/// let report = mapper.map(&mut image);
///
/// assert_eq!(report.mapped, 2);
/// assert_eq!(image.get(0, 0), Rgba::new(0, 0, 0, 255));
/// assert_eq!(image.get(1, 0), Rgba::new(255, 255, 255, 128));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteMapper {
    palette: Palette,
    options: MapOptions,
}

impl PaletteMapper {
    /// Create a mapper with default options.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            options: MapOptions::default(),
        }
    }

    /// Parse hex colors and create a mapper with default options.
    ///
    /// # Errors
    ///
    /// [`MapError::Palette`] if the list is empty or any entry is malformed.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, MapError> {
        Ok(Self::new(Palette::from_hex(hex)?))
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the matching mode.
    #[inline]
    pub fn mode(mut self, mode: MappingMode) -> Self {
        self.options = self.options.mode(mode);
        self
    }

    /// Set both exclusion thresholds.
    #[inline]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.options = self.options.thresholds(thresholds);
        self
    }

    /// Enable or disable the contrast stretch pre-pass.
    #[inline]
    pub fn contrast_stretch(mut self, enabled: bool) -> Self {
        self.options = self.options.contrast_stretch(enabled);
        self
    }

    /// The palette this mapper targets.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The current options.
    #[inline]
    pub fn map_options(&self) -> &MapOptions {
        &self.options
    }

    /// Map `image` onto the palette in place.
    ///
    /// Excluded pixels come out bit-identical; every other pixel gets a
    /// palette color with its original alpha.
    pub fn map(&self, image: &mut RgbaBuffer) -> MapReport {
        let options = self.options;
        let thresholds = options.thresholds;

        debug!(
            palette = self.palette.len(),
            mode = %options.mode,
            black_threshold = thresholds.black,
            alpha_threshold = thresholds.alpha,
            width = image.width(),
            height = image.height(),
            "Mapping image"
        );

        let initial_range = analyze_luminance_range(image, thresholds);
        debug!(
            min = initial_range.min,
            max = initial_range.max,
            "Image luminance range"
        );

        let (stretched, final_range) = if options.contrast_stretch {
            let stretched = contrast_stretch(image, initial_range, thresholds);
            let range = analyze_luminance_range(image, thresholds);
            debug!(stretched, min = range.min, max = range.max, "Applied contrast stretch");
            (stretched, range)
        } else {
            (0, initial_range)
        };

        let profile = PaletteProfile::new(&self.palette);
        let strategy = Strategy::build(options.mode, &profile, final_range, || {
            collect_sorted_luminances(image, thresholds)
        });

        if let Some(mapping) = strategy.quantile_mapping() {
            for (i, segment) in mapping.segments().iter().enumerate() {
                trace!(
                    segment = i + 1,
                    threshold = segment.threshold,
                    color = %segment.color,
                    luminance = segment.color.luminance(),
                    "Quantile segment"
                );
            }
        }

        let mapped = match &strategy {
            Strategy::Rgb(m) => rewrite(image, m, thresholds),
            Strategy::Luminance(m) => rewrite(image, m, thresholds),
            Strategy::Hsl(m) => rewrite(image, m, thresholds),
            Strategy::Hybrid(m) => rewrite(image, m, thresholds),
        };
        let total = image.len();

        info!(
            mode = strategy.name(),
            mapped,
            skipped = total - mapped,
            "Mapped image to palette"
        );

        MapReport {
            mode: strategy.name(),
            palette_size: profile.len(),
            total,
            mapped,
            skipped: total - mapped,
            stretched,
            initial_range,
            final_range,
            palette_range: profile.range(),
            quantile: strategy.quantile_mapping().cloned(),
        }
    }
}

/// One-shot mapping: parse `palette`, then map `image` with `options`.
///
/// The palette is fully parsed before the image is read, so an error leaves
/// the image untouched.
///
/// # Example
///
/// ```
/// use palette_map::{map_colors, MapError, MapOptions, Rgba, RgbaBuffer};
///
/// let mut image = RgbaBuffer::new(1, 1, Rgba::new(90, 90, 90, 255));
/// let err = map_colors(&mut image, &["#000000", "oops"], &MapOptions::new());
///
/// assert!(matches!(err, Err(MapError::Palette(_))));
/// assert_eq!(image.get(0, 0), Rgba::new(90, 90, 90, 255));
/// ```
pub fn map_colors<S: AsRef<str>>(
    image: &mut RgbaBuffer,
    palette: &[S],
    options: &MapOptions,
) -> Result<MapReport, MapError> {
    let mapper = PaletteMapper::from_hex(palette)?.options(*options);
    Ok(mapper.map(image))
}

/// Stage 5: rewrite every mappable pixel. Returns the number rewritten.
fn rewrite<M: Matcher + Sync>(image: &mut RgbaBuffer, matcher: &M, thresholds: Thresholds) -> usize {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        image
            .pixels_mut()
            .par_iter_mut()
            .map(|px| remap_pixel(px, matcher, thresholds))
            .sum()
    }

    #[cfg(not(feature = "parallel"))]
    {
        image
            .pixels_mut()
            .iter_mut()
            .map(|px| remap_pixel(px, matcher, thresholds))
            .sum()
    }
}

#[inline]
fn remap_pixel<M: Matcher>(px: &mut Rgba, matcher: &M, thresholds: Thresholds) -> usize {
    if thresholds.is_excluded(*px) {
        return 0;
    }
    *px = px.with_rgb(matcher.nearest(px.rgb()));
    1
}
