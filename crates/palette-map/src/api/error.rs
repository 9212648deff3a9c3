//! Unified error type for the palette-map public API.
//!
//! [`MapError`] is what the mapping entry points return.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the palette-map public API.
///
/// # Example
///
/// ```
/// use palette_map::{MapError, Palette};
///
/// fn load() -> Result<Palette, MapError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// # load().unwrap();
/// ```
#[derive(Debug)]
pub enum MapError {
    /// Palette validation error (empty list or malformed entry)
    Palette(PaletteError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Palette(err) => Some(err),
        }
    }
}

impl From<PaletteError> for MapError {
    fn from(err: PaletteError) -> Self {
        MapError::Palette(err)
    }
}
