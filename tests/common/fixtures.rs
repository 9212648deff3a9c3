//! Test fixtures and helpers.

use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};

use palette_map::{Rgba, RgbaBuffer};
use retint::rendering::write_png;

/// Palettes used across tests
pub mod palettes {
    pub const GREYS: [&str; 3] = ["#000000", "#808080", "#FFFFFF"];

    pub const BROWNS: [&str; 6] = [
        "#31210b", "#503a12", "#4a3411", "#442f0f", "#3e2a0e", "#37260c",
    ];
}

/// Fixed clock for timestamped output names
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap()
}

/// Horizontal grey ramp from 0 to 255, fully opaque
pub fn grey_ramp(width: usize) -> RgbaBuffer {
    let pixels = (0..width)
        .map(|i| {
            let v = (i * 255 / (width - 1)) as u8;
            Rgba::new(v, v, v, 255)
        })
        .collect();
    RgbaBuffer::from_pixels(width, 1, pixels).unwrap()
}

/// A 4x2 sprite: a transparent corner, a black outline pixel and colored body
pub fn sprite() -> RgbaBuffer {
    let mut image = RgbaBuffer::new(4, 2, Rgba::new(180, 120, 60, 255));
    image.set(0, 0, Rgba::new(250, 250, 250, 0));
    image.set(1, 0, Rgba::new(4, 4, 4, 255));
    image.set(2, 1, Rgba::new(90, 60, 30, 200));
    image.set(3, 1, Rgba::new(230, 200, 150, 255));
    image
}

/// Write `image` as `name` inside `dir`
pub fn write_fixture(dir: &Path, name: &str, image: &RgbaBuffer) -> PathBuf {
    let path = dir.join(name);
    write_png(&path, image).unwrap();
    path
}

/// Write a YAML config file inside `dir`
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("retint.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

/// Number of entries in a directory
pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
