//! Palette types and utilities
//!
//! This module provides the ordered [`Palette`], its per-run
//! [`PaletteProfile`], and the error types for parsing and validation.

mod error;
mod palette;
mod profile;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
pub use profile::PaletteProfile;
