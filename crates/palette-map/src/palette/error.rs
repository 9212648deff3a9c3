//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color string is not exactly six hexadecimal digits
/// (after trimming and stripping an optional leading `#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits (the value is the length found)
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit was encountered
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "invalid hex color length {} (expected 6 digits)", len)
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid hex character {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// A palette entry failed to parse
    InvalidColor {
        /// Position of the offending entry in the input list
        index: usize,
        /// The entry as given
        input: String,
        /// Why it failed
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::InvalidColor {
                index,
                input,
                source,
            } => {
                write!(f, "invalid color {:?} at index {}: {}", input, index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::InvalidColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
