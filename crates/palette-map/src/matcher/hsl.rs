//! Hue-aware matching for multi-hue palettes.

use super::{first_minimum, Matcher};
use crate::color::{hue_distance, Hsl, Rgb};
use crate::image::LuminanceRange;
use crate::palette::PaletteProfile;

/// Balances hue fidelity against tonal placement.
///
/// For each entry the score is
///
/// ```text
/// hue_weight * (2 * hue_distance(pixel, entry))
///     + luminance_weight * |norm_image(pixel_lum) - norm_palette(entry_lum)|
/// ```
///
/// Hue distance is at most 0.5, so it is doubled to share the 0..=1 scale of
/// the luminance term. Pixel luminance is normalized against the image's
/// range and entry luminance against the palette's range, which lets a dim
/// image still reach the palette's brightest entries.
///
/// Achromatic entries have hue 0.0, which is also the hue of pure red. A
/// pure red pixel therefore gets no hue advantage over a grey entry and is
/// decided by the luminance term alone. The hue term only favours a red
/// entry whose own hue differs from 0.0, such as `#DC283C` (hue ~0.98).
#[derive(Debug, Clone)]
pub struct HslMatcher<'a> {
    profile: &'a PaletteProfile,
    palette_hsl: Vec<Hsl>,
    palette_norm_lum: Vec<f64>,
    image_range: LuminanceRange,
    hue_weight: f64,
    luminance_weight: f64,
}

impl<'a> HslMatcher<'a> {
    /// Precompute the palette HSL table for this run.
    pub fn new(
        profile: &'a PaletteProfile,
        image_range: LuminanceRange,
        hue_weight: f64,
        luminance_weight: f64,
    ) -> Self {
        let palette_hsl = profile.colors().iter().map(|&c| Hsl::from(c)).collect();
        let palette_norm_lum = (0..profile.len())
            .map(|i| profile.normalized_luminance(i))
            .collect();
        Self {
            profile,
            palette_hsl,
            palette_norm_lum,
            image_range,
            hue_weight,
            luminance_weight,
        }
    }
}

impl Matcher for HslMatcher<'_> {
    fn nearest(&self, color: Rgb) -> Rgb {
        let pixel_hue = Hsl::from(color).hue;
        let pixel_lum = self.image_range.normalize(color.luminance());

        let scores = self
            .palette_hsl
            .iter()
            .zip(&self.palette_norm_lum)
            .map(|(entry, &entry_lum)| {
                let hue = hue_distance(pixel_hue, entry.hue) * 2.0;
                let lum = (pixel_lum - entry_lum).abs();
                self.hue_weight * hue + self.luminance_weight * lum
            });

        self.profile.colors()[first_minimum(scores)]
    }
}
