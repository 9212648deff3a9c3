//! RGBA pixel and pixel buffer types.

use super::error::BufferError;
use crate::color::Rgb;

/// One RGBA8 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent)
    pub a: u8,
}

impl Rgba {
    /// Create a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color part of the pixel.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Replace the color, keeping alpha.
    #[inline]
    pub const fn with_rgb(self, color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b, self.a)
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A rectangular, row-major RGBA8 image held in memory.
///
/// Either dimension may be zero.
///
/// # Example
///
/// ```
/// use palette_map::{Rgba, RgbaBuffer};
///
/// let raw = vec![10, 20, 30, 255, 40, 50, 60, 0];
/// let buffer = RgbaBuffer::from_raw(2, 1, raw.clone()).unwrap();
///
/// assert_eq!(buffer.get(1, 0), Rgba::new(40, 50, 60, 0));
/// assert_eq!(buffer.into_raw(), raw);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl RgbaBuffer {
    /// Create a buffer filled with `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        let len = match pixel_count(width, height, 1) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Wrap existing pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError::SizeMismatch`] if `pixels.len() != width * height`,
    /// [`BufferError::TooLarge`] if that product overflows.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, BufferError> {
        let expected = pixel_count(width, height, 1)?;
        if pixels.len() != expected {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer from interleaved `[R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::SizeMismatch`] if `raw.len() != width * height * 4`,
    /// [`BufferError::TooLarge`] if that product overflows.
    pub fn from_raw(width: usize, height: usize, raw: Vec<u8>) -> Result<Self, BufferError> {
        let expected = pixel_count(width, height, 4)?;
        if raw.len() != expected {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual: raw.len(),
            });
        }
        let pixels = raw
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten back into interleaved `[R, G, B, A, ...]` bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_bytes()).collect()
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// `true` when the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Rgba) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = pixel;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable access to all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }
}

/// `width * height * channels`, or `TooLarge` on overflow.
fn pixel_count(width: usize, height: usize, channels: usize) -> Result<usize, BufferError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(BufferError::TooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let err = RgbaBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            BufferError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15,
            }
        );
    }

    #[test]
    fn test_zero_sized_buffers() {
        let empty = RgbaBuffer::from_raw(0, 7, Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.height(), 7);
        assert!(RgbaBuffer::from_pixels(3, 0, Vec::new()).is_ok());
    }

    #[test]
    fn test_row_major_addressing() {
        let mut buffer = RgbaBuffer::new(3, 2, Rgba::default());
        buffer.set(2, 1, Rgba::new(1, 2, 3, 4));
        assert_eq!(buffer.pixels()[5], Rgba::new(1, 2, 3, 4));
        assert_eq!(buffer.get(2, 1), Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn test_with_rgb_keeps_alpha() {
        let px = Rgba::new(9, 9, 9, 77).with_rgb(Rgb::new(1, 2, 3));
        assert_eq!(px, Rgba::new(1, 2, 3, 77));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let err = RgbaBuffer::from_raw(usize::MAX / 2, 3, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            BufferError::TooLarge {
                width: usize::MAX / 2,
                height: 3,
            }
        );

        // Fits as a pixel count, overflows once multiplied by 4 channels
        let width = usize::MAX / 4 + 1;
        assert!(matches!(
            RgbaBuffer::from_raw(width, 1, Vec::new()),
            Err(BufferError::TooLarge { .. })
        ));
        assert!(matches!(
            RgbaBuffer::from_pixels(usize::MAX, 2, Vec::new()),
            Err(BufferError::TooLarge { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_new_panics_on_overflow() {
        RgbaBuffer::new(usize::MAX, 2, Rgba::default());
    }
}
