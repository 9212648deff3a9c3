//! Retint - recolor PNG artwork onto a fixed palette
//!
//! Application layer around the `palette-map` engine: YAML configuration,
//! PNG I/O and output naming. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
