#![allow(clippy::module_inception)]

//! palette-map: map image pixels onto a fixed color palette
//!
//! Every pixel that is neither near-black nor transparent is replaced by the
//! "closest" entry of a target palette, under one of four distance
//! formulations. An optional contrast stretch runs first to give tonal
//! matchers more room on dim sources.
//!
//! # Quick Start
//!
//! The [`PaletteMapper`] builder is the primary entry point:
//!
//! ```
//! use palette_map::{MappingMode, PaletteMapper, Rgba, RgbaBuffer};
//!
//! let mapper = PaletteMapper::from_hex(&["#31210b", "#503a12", "#4a3411"])
//!     .unwrap()
//!     .mode(MappingMode::Luminance);
//!
//! let mut image = RgbaBuffer::new(4, 4, Rgba::new(128, 96, 64, 255));
//! let report = mapper.map(&mut image);
//!
//! assert_eq!(report.mapped, 16);
//! ```
//!
//! For one-off calls with unparsed hex strings, use [`map_colors`].
//!
//! # Matching Modes
//!
//! | Mode | Best for | Score |
//! |------|----------|-------|
//! | `rgb` | evenly spread palettes | Euclidean RGB distance |
//! | `luminance` | near-monochrome palettes | equal-population luminance bands |
//! | `hsl` | multi-hue palettes | `hw * 2 * dHue + lw * dLum` |
//! | `hybrid` | in between | `cw * dRgb / 441.67 + (1 - cw) * dLum` |
//!
//! `dLum` compares the pixel's luminance normalized against the *image's*
//! range with the entry's luminance normalized against the *palette's*
//! range. A degenerate range (min == max) normalizes everything to 0.5
//! rather than failing.
//!
//! # Pipeline
//!
//! ```text
//! hex palette ──parse──> Palette            (fails before any pixel is read)
//!                          │
//! RgbaBuffer ──scan──> LuminanceRange
//!     │                    │
//!     └──[contrast stretch]──> rescan
//!                          │
//!             PaletteProfile + Strategy     (quantile table / HSL table)
//!                          │
//!             per-pixel rewrite, alpha kept (optionally on rayon)
//! ```
//!
//! # Exclusion
//!
//! A pixel is excluded when `alpha < alpha_threshold` or
//! `r + g + b < black_threshold` (defaults 10 and 30). Excluded pixels are
//! never scanned into statistics, stretched, or recolored.
//!
//! # Features
//!
//! - `parallel`: run the rewrite pass with rayon. Output is identical to the
//!   serial build because each pixel depends only on itself and the frozen
//!   tables.

pub mod api;
pub mod color;
pub mod image;
pub mod matcher;
pub mod palette;
pub mod preprocess;


pub use api::{map_colors, MapError, MapOptions, MapReport, PaletteMapper};
pub use color::{Hsl, Rgb};
pub use image::{BufferError, LuminanceRange, Rgba, RgbaBuffer, Thresholds};
pub use matcher::{
    HslMatcher, HybridMatcher, MappingMode, Matcher, ParseModeError, QuantileMapping,
    QuantileSegment, RgbMatcher, Strategy,
};
pub use palette::{Palette, PaletteError, PaletteProfile, ParseColorError};
pub use preprocess::contrast_stretch;
