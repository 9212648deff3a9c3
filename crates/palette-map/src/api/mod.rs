//! Public API for the palette-map crate.
//!
//! This module provides the high-level API: the [`PaletteMapper`] builder,
//! the one-shot [`map_colors`] function, [`MapOptions`], the [`MapReport`]
//! each run returns, and the unified [`MapError`] type.

mod error;
mod mapper;
mod options;
mod report;

pub use error::MapError;
pub use mapper::{map_colors, PaletteMapper};
pub use options::MapOptions;
pub use report::MapReport;
