//! Ordered target palette.
//!
//! A [`Palette`] is the fixed set of colors an image is mapped onto. Entry
//! order is significant: every matcher breaks ties in favour of the earlier
//! entry, so duplicates are kept as given.

use super::error::PaletteError;
use crate::color::Rgb;

/// An ordered, non-empty list of target colors.
///
/// # Example
///
/// ```
/// use palette_map::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#808080", "#FFFFFF"]).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.get(1), Rgb::new(128, 128, 128));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from already-parsed colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Parse a palette from hex color strings (`#RRGGBB` or `RRGGBB`).
    ///
    /// Fails on the first malformed entry, reporting its index.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `hex` is empty
    /// - [`PaletteError::InvalidColor`] if any entry fails to parse
    ///
    /// # Example
    ///
    /// ```
    /// use palette_map::{Palette, PaletteError};
    ///
    /// let err = Palette::from_hex(&["#000000", "#12345"]).unwrap_err();
    /// assert!(matches!(err, PaletteError::InvalidColor { index: 1, .. }));
    /// ```
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        if hex.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let s = s.as_ref();
                s.parse::<Rgb>().map_err(|source| PaletteError::InvalidColor {
                    index,
                    input: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { colors })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}
