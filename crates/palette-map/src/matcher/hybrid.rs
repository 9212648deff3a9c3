//! RGB distance blended with tonal distance.

use super::{first_minimum, Matcher};
use crate::color::{rgb_distance, Rgb, MAX_RGB_DISTANCE};
use crate::image::LuminanceRange;
use crate::palette::PaletteProfile;

/// Linear blend of normalized RGB distance and normalized luminance
/// difference, weighted `color_weight` and `1 - color_weight`.
#[derive(Debug, Clone)]
pub struct HybridMatcher<'a> {
    profile: &'a PaletteProfile,
    palette_norm_lum: Vec<f64>,
    image_range: LuminanceRange,
    color_weight: f64,
}

impl<'a> HybridMatcher<'a> {
    /// Create the matcher. `color_weight` is expected in 0.0..=1.0.
    pub fn new(profile: &'a PaletteProfile, image_range: LuminanceRange, color_weight: f64) -> Self {
        let palette_norm_lum = (0..profile.len())
            .map(|i| profile.normalized_luminance(i))
            .collect();
        Self {
            profile,
            palette_norm_lum,
            image_range,
            color_weight,
        }
    }

    /// Weight of the luminance term.
    #[inline]
    pub fn luminance_weight(&self) -> f64 {
        1.0 - self.color_weight
    }
}

impl Matcher for HybridMatcher<'_> {
    fn nearest(&self, color: Rgb) -> Rgb {
        let pixel_lum = self.image_range.normalize(color.luminance());
        let luminance_weight = self.luminance_weight();

        let scores = self
            .profile
            .colors()
            .iter()
            .zip(&self.palette_norm_lum)
            .map(|(&entry, &entry_lum)| {
                let rgb = rgb_distance(color, entry) / MAX_RGB_DISTANCE;
                let lum = (pixel_lum - entry_lum).abs();
                self.color_weight * rgb + luminance_weight * lum
            });

        self.profile.colors()[first_minimum(scores)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::RgbMatcher;
    use crate::palette::Palette;

    fn profile(hex: &[&str]) -> PaletteProfile {
        PaletteProfile::new(&Palette::from_hex(hex).unwrap())
    }

    #[test]
    fn test_full_color_weight_agrees_with_rgb_matcher() {
        let p = profile(&["#000000", "#FF0000", "#00FF00", "#0000FF", "#FFFFFF"]);
        let hybrid = HybridMatcher::new(&p, LuminanceRange::new(20.0, 90.0), 1.0);
        let rgb = RgbMatcher::new(&p);

        for color in [
            Rgb::new(30, 30, 30),
            Rgb::new(200, 40, 40),
            Rgb::new(60, 180, 90),
            Rgb::new(230, 230, 250),
        ] {
            assert_eq!(hybrid.nearest(color), rgb.nearest(color), "for {color}");
        }
    }

    #[test]
    fn test_zero_color_weight_stretches_dim_image_over_palette() {
        // The image only spans luminance 20..80, but its brightest pixel
        // still maps to the palette's brightest entry.
        let p = profile(&["#000000", "#808080", "#FFFFFF"]);
        let m = HybridMatcher::new(&p, LuminanceRange::new(20.0, 80.0), 0.0);

        assert_eq!(m.nearest(Rgb::new(80, 80, 80)), Rgb::new(255, 255, 255));
        assert_eq!(m.nearest(Rgb::new(50, 50, 50)), Rgb::new(128, 128, 128));
        assert_eq!(m.nearest(Rgb::new(20, 20, 20)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_luminance_weight_complements_color_weight() {
        let p = profile(&["#000000"]);
        let m = HybridMatcher::new(&p, LuminanceRange::FULL, 0.25);
        assert_eq!(m.luminance_weight(), 0.75);
    }
}
