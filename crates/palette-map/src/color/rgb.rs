//! 8-bit RGB color type
//!
//! [`Rgb`] is the value type shared by palettes, pixels and matchers. Every
//! derived attribute (luminance, HSL) is computed on demand.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Luminance weight of the red channel.
const LUMA_R: f64 = 0.299;
/// Luminance weight of the green channel.
const LUMA_G: f64 = 0.587;
/// Luminance weight of the blue channel.
const LUMA_B: f64 = 0.114;

/// A color with three 8-bit channels.
///
/// # Example
///
/// ```
/// use palette_map::Rgb;
///
/// let orange: Rgb = "#FF8000".parse().unwrap();
/// assert_eq!(orange, Rgb::new(255, 128, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceptual luminance `0.299r + 0.587g + 0.114b`, in 0.0..=255.0.
    ///
    /// # Example
    /// ```
    /// use palette_map::Rgb;
    /// assert_eq!(Rgb::new(0, 0, 0).luminance(), 0.0);
    /// assert!((Rgb::new(255, 255, 255).luminance() - 255.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn luminance(self) -> f64 {
        LUMA_R * self.r as f64 + LUMA_G * self.g as f64 + LUMA_B * self.b as f64
    }

    /// Sum of the three channels (0..=765).
    #[inline]
    pub fn channel_sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

impl fmt::Display for Rgb {
    /// Formats as `#RRGGBB` (uppercase).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a `#RRGGBB` or `RRGGBB` hex string.
    ///
    /// Parsing is case-insensitive and surrounding whitespace is trimmed.
    /// Shorthand `#RGB` is not accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_map::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// let teal: Rgb = "008080".parse().unwrap();
    /// assert_eq!(teal, Rgb::new(0, 128, 128));
    ///
    /// assert!("#FFF".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Checked before slicing so that multi-byte input never splits a char
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }
        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.len()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|_| ParseColorError::InvalidLength(s.len()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("#31210b".parse::<Rgb>().unwrap(), Rgb::new(0x31, 0x21, 0x0b));
        assert_eq!("31210B".parse::<Rgb>().unwrap(), Rgb::new(0x31, 0x21, 0x0b));
        assert_eq!("  #808080 ".parse::<Rgb>().unwrap(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!("#FFF".parse::<Rgb>(), Err(ParseColorError::InvalidLength(3)));
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!(
            "#FFFFFFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(8))
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert_eq!("#GG0000".parse::<Rgb>(), Err(ParseColorError::InvalidDigit('G')));
        // from_str_radix alone would accept a leading sign
        assert_eq!("+F0000".parse::<Rgb>(), Err(ParseColorError::InvalidDigit('+')));
        assert_eq!("##000000".parse::<Rgb>(), Err(ParseColorError::InvalidDigit('#')));
        assert!(matches!(
            "ééé".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit('é'))
        ));
    }

    #[test]
    fn test_luminance_weights() {
        assert!((Rgb::new(255, 0, 0).luminance() - 76.245).abs() < 1e-9);
        assert!((Rgb::new(0, 255, 0).luminance() - 149.685).abs() < 1e-9);
        assert!((Rgb::new(0, 0, 255).luminance() - 29.07).abs() < 1e-9);
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Rgb::new(0x31, 0x21, 0x0b).to_string(), "#31210B");
    }

    #[test]
    fn test_channel_sum_does_not_overflow() {
        assert_eq!(Rgb::new(255, 255, 255).channel_sum(), 765);
    }
}
