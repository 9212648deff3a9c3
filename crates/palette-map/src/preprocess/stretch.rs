//! Luminance-driven contrast stretch.

use crate::image::{LuminanceRange, RgbaBuffer, Thresholds};

/// Stretch every mappable pixel's channels across the observed luminance
/// range, in place.
///
/// Each channel becomes `trunc((c - min / 3) * 255 / (max - min))`, clamped
/// to 0..=255. Alpha and excluded pixels are never touched. A degenerate
/// `range` leaves the image unchanged.
///
/// The luminance distribution changes as a result, so callers must
/// re-analyze the range before using it for matching.
///
/// Returns the number of pixels that were rewritten.
///
/// # Example
///
/// ```
/// use palette_map::{contrast_stretch, LuminanceRange, Rgba, RgbaBuffer, Thresholds};
///
/// let mut image = RgbaBuffer::new(1, 1, Rgba::new(90, 90, 90, 200));
/// let range = LuminanceRange::new(60.0, 120.0);
/// contrast_stretch(&mut image, range, Thresholds::default());
///
/// // (90 - 20) * 255 / 60 = 297.5, clamped
/// assert_eq!(image.get(0, 0), Rgba::new(255, 255, 255, 200));
/// ```
pub fn contrast_stretch(
    image: &mut RgbaBuffer,
    range: LuminanceRange,
    thresholds: Thresholds,
) -> usize {
    if range.is_degenerate() {
        return 0;
    }

    // Offset is min/3, not min: the darkest pixel does not land on 0.
    let offset = range.min / 3.0;
    let scale = 255.0 / range.span();
    let stretch = |c: u8| ((c as f64 - offset) * scale).trunc().clamp(0.0, 255.0) as u8;

    let mut rewritten = 0;
    for px in image.pixels_mut() {
        if thresholds.is_excluded(*px) {
            continue;
        }
        px.r = stretch(px.r);
        px.g = stretch(px.g);
        px.b = stretch(px.b);
        rewritten += 1;
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{analyze_luminance_range, Rgba};

    #[test]
    fn test_identity_on_full_range() {
        let pixels: Vec<Rgba> = (0..=255u8)
            .map(|v| Rgba::new(v, v.wrapping_mul(7), 255 - v, 255))
            .collect();
        let mut image = RgbaBuffer::from_pixels(256, 1, pixels).unwrap();
        let before = image.clone();

        contrast_stretch(&mut image, LuminanceRange::FULL, Thresholds::none());
        assert_eq!(image, before);
    }

    #[test]
    fn test_degenerate_range_is_noop() {
        let mut image = RgbaBuffer::new(2, 2, Rgba::new(80, 90, 100, 255));
        let before = image.clone();

        let rewritten =
            contrast_stretch(&mut image, LuminanceRange::new(40.0, 40.0), Thresholds::default());
        assert_eq!(rewritten, 0);
        assert_eq!(image, before);
    }

    #[test]
    fn test_excluded_and_alpha_untouched() {
        let pixels = vec![
            Rgba::new(5, 5, 5, 255),     // black, excluded
            Rgba::new(150, 150, 150, 3), // transparent, excluded
            Rgba::new(60, 60, 60, 128),
            Rgba::new(120, 120, 120, 64),
        ];
        let mut image = RgbaBuffer::from_pixels(4, 1, pixels.clone()).unwrap();
        let thresholds = Thresholds::default();
        let range = analyze_luminance_range(&image, thresholds);

        let rewritten = contrast_stretch(&mut image, range, thresholds);

        assert_eq!(rewritten, 2);
        assert_eq!(image.pixels()[0], pixels[0]);
        assert_eq!(image.pixels()[1], pixels[1]);
        assert_eq!(image.pixels()[2].a, 128);
        assert_eq!(image.pixels()[3].a, 64);
    }

    #[test]
    fn test_formula_with_offset() {
        // range ~ 60..120: offset 20, scale 4.25
        let pixels = vec![Rgba::new(60, 60, 60, 255), Rgba::new(120, 120, 120, 255)];
        let mut image = RgbaBuffer::from_pixels(2, 1, pixels).unwrap();
        let range = LuminanceRange::new(60.0, 120.0);

        contrast_stretch(&mut image, range, Thresholds::default());

        // (60 - 20) * 4.25 = 170; (120 - 20) * 4.25 = 425 -> 255
        assert_eq!(image.pixels()[0], Rgba::new(170, 170, 170, 255));
        assert_eq!(image.pixels()[1], Rgba::new(255, 255, 255, 255));
    }

    #[test]
    fn test_negative_results_clamp_to_zero() {
        let mut image = RgbaBuffer::new(1, 1, Rgba::new(200, 10, 10, 255));
        contrast_stretch(&mut image, LuminanceRange::new(90.0, 100.0), Thresholds::default());
        // (10 - 30) * 25.5 < 0
        assert_eq!(image.get(0, 0), Rgba::new(255, 0, 0, 255));
    }
}
