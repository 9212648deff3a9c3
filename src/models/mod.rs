pub mod config;
pub mod summary;

pub use config::{AppConfig, ConfigOverrides, ModeName, CONFIG_ENV};
pub use summary::{palette_entries, PaletteEntry, RangeSummary, ReportSummary, SegmentSummary};
