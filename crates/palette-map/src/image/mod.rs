//! In-memory RGBA images and the scans run over them.
//!
//! Decoding and encoding image files is left to the caller; this module only
//! knows about the [`RgbaBuffer`] pixel grid.

mod buffer;
mod error;
mod scan;

pub use buffer::{Rgba, RgbaBuffer};
pub use error::BufferError;
pub use scan::{analyze_luminance_range, collect_sorted_luminances, LuminanceRange, Thresholds};
