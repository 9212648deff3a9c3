//! Nearest color by Euclidean RGB distance.

use super::{first_minimum, Matcher};
use crate::color::{rgb_distance, Rgb};
use crate::palette::PaletteProfile;

/// Picks the palette color closest in RGB space.
#[derive(Debug, Clone, Copy)]
pub struct RgbMatcher<'a> {
    colors: &'a [Rgb],
}

impl<'a> RgbMatcher<'a> {
    /// Create a matcher over the profile's colors. Needs no extra tables.
    pub fn new(profile: &'a PaletteProfile) -> Self {
        Self {
            colors: profile.colors(),
        }
    }
}

impl Matcher for RgbMatcher<'_> {
    #[inline]
    fn nearest(&self, color: Rgb) -> Rgb {
        let idx = first_minimum(self.colors.iter().map(|&entry| rgb_distance(color, entry)));
        self.colors[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    fn profile_for(hex: &[&str]) -> PaletteProfile {
        PaletteProfile::new(&Palette::from_hex(hex).unwrap())
    }

    #[test]
    fn test_grey_ramp() {
        let profile = profile_for(&["#000000", "#808080", "#FFFFFF"]);
        let m = RgbMatcher::new(&profile);

        assert_eq!(m.nearest(Rgb::new(10, 10, 10)), Rgb::new(0, 0, 0));
        assert_eq!(m.nearest(Rgb::new(200, 200, 200)), Rgb::new(255, 255, 255));
        assert_eq!(m.nearest(Rgb::new(120, 130, 125)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_single_entry_always_wins() {
        let profile = profile_for(&["#4a3411"]);
        let m = RgbMatcher::new(&profile);

        for color in [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(0, 200, 90)] {
            assert_eq!(m.nearest(color), Rgb::new(0x4a, 0x34, 0x11));
        }
    }

    #[test]
    fn test_equidistant_tie_goes_to_first_entry() {
        // (100,100,100) is exactly 50 * sqrt(3) from both entries
        let profile = profile_for(&["#969696", "#323232"]);
        let m = RgbMatcher::new(&profile);
        assert_eq!(m.nearest(Rgb::new(100, 100, 100)), Rgb::new(150, 150, 150));

        let profile = profile_for(&["#323232", "#969696"]);
        let m = RgbMatcher::new(&profile);
        assert_eq!(m.nearest(Rgb::new(100, 100, 100)), Rgb::new(50, 50, 50));
    }
}
