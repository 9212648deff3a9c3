//! Error type for pixel buffer construction.

use std::fmt;

/// Returned when pixel data does not fit the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Data length differs from what `width * height` requires
    SizeMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Required length (pixels or bytes, depending on the constructor)
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// `width * height` (times the channel count) overflows `usize`
    TooLarge {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual,
            } => write!(
                f,
                "buffer size mismatch for {}x{} image: expected {} elements, got {}",
                width, height, expected, actual
            ),
            BufferError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for BufferError {}
