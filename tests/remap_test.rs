//! End-to-end tests: PNG on disk -> RemapService -> PNG on disk.

mod common;

use common::*;
use pretty_assertions::assert_eq;

use palette_map::{Palette, Rgb, Rgba, Thresholds};
use retint::error::{AppError, ImageIoError};
use retint::models::{AppConfig, ConfigOverrides, ModeName};
use retint::rendering::read_png;
use retint::services::RemapService;

fn config_with(palette: &[&str], mode: ModeName) -> AppConfig {
    AppConfig {
        palette: palette.iter().map(|s| s.to_string()).collect(),
        mode,
        ..AppConfig::default()
    }
}

#[test]
fn test_default_config_writes_timestamped_sibling() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "sprite.png", &sprite());
    let service = RemapService::new(AppConfig::default()).unwrap();

    let outcome = service.remap_file_at(&input, None, fixed_now()).unwrap();

    assert_eq!(outcome.output, dir.path().join("sprite_20240102_030405.png"));
    assert_eq!(outcome.report.mapped, 6);
    assert_eq!(outcome.report.skipped, 2);
    assert_eq!(read_png(&input).unwrap(), sprite(), "input must be untouched");

    let palette = Palette::from_hex(&palettes::BROWNS).unwrap();
    let original = sprite();
    let mapped = read_png(&outcome.output).unwrap();
    for (before, after) in original.pixels().iter().zip(mapped.pixels()) {
        if Thresholds::default().is_excluded(*before) {
            assert_eq!(before, after);
        } else {
            assert!(palette.colors().contains(&after.rgb()));
            assert_eq!(before.a, after.a);
        }
    }
}

#[test]
fn test_rgb_mode_with_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ramp.png", &grey_ramp(16));
    let output = dir.path().join("mapped.png");
    let service = RemapService::new(config_with(&palettes::GREYS, ModeName::Rgb)).unwrap();

    let outcome = service.remap_file(&input, Some(output.as_path())).unwrap();

    assert_eq!(outcome.output, output);
    let values: Vec<u8> = read_png(&output)
        .unwrap()
        .pixels()
        .iter()
        .map(|px| px.r)
        .collect();
    // 0 is excluded; 17..51 -> black, 68..187 -> grey, 204..255 -> white
    let mut expected: Vec<u8> = vec![0, 0, 0, 0];
    expected.extend([128; 8]);
    expected.extend([255; 4]);
    assert_eq!(values, expected);
}

#[test]
fn test_overwrite_original_replaces_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ramp.png", &grey_ramp(8));
    let config = AppConfig {
        overwrite_original: true,
        ..config_with(&["#FF0000"], ModeName::Rgb)
    };
    let service = RemapService::new(config).unwrap();

    let outcome = service.remap_file_at(&input, None, fixed_now()).unwrap();

    assert_eq!(outcome.output, input);
    assert_eq!(file_count(dir.path()), 1);
    let image = read_png(&input).unwrap();
    assert_eq!(image.get(0, 0), Rgba::new(0, 0, 0, 255));
    assert!(image
        .pixels()
        .iter()
        .skip(1)
        .all(|px| px.rgb() == Rgb::new(255, 0, 0)));
}

#[test]
fn test_analyze_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "sprite.png", &sprite());
    let service = RemapService::new(AppConfig::default()).unwrap();

    let report = service.analyze_file(&input).unwrap();

    assert_eq!(file_count(dir.path()), 1);
    assert_eq!(read_png(&input).unwrap(), sprite());
    assert_eq!(report.mode, "luminance");
    assert_eq!(report.mapped, 6);
    assert_eq!(report.quantile.map(|q| q.len()), Some(6));
}

#[test]
fn test_stretch_override_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "sprite.png", &sprite());
    let mut config = AppConfig::default();
    config.apply(&ConfigOverrides {
        contrast_stretch: Some(true),
        ..ConfigOverrides::default()
    });
    let service = RemapService::new(config).unwrap();

    let report = service.analyze_file(&input).unwrap();

    assert_eq!(report.stretched, 6);
    assert_eq!(report.mapped, 6);
    assert!(report.final_range.max > report.initial_range.max);
}

#[test]
fn test_hsl_mode_keeps_transparency() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "sprite.png", &sprite());
    let output = dir.path().join("out.png");
    let service = RemapService::new(config_with(
        &["#000000", "#FFFFFF", "#C87832", "#3250C8"],
        ModeName::Hsl,
    ))
    .unwrap();

    service.remap_file(&input, Some(output.as_path())).unwrap();

    let mapped = read_png(&output).unwrap();
    assert_eq!(mapped.get(0, 0), Rgba::new(250, 250, 250, 0));
    assert_eq!(mapped.get(1, 0), Rgba::new(4, 4, 4, 255));
    assert_eq!(mapped.get(2, 1).a, 200);
}

#[test]
fn test_invalid_png_is_image_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"not a png at all").unwrap();
    let service = RemapService::new(AppConfig::default()).unwrap();

    let result = service.remap_file_at(&input, None, fixed_now());

    assert!(matches!(
        result,
        Err(AppError::Image(ImageIoError::PngDecode(_)))
    ));
    assert_eq!(file_count(dir.path()), 1);
}

#[test]
fn test_missing_input_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let service = RemapService::new(AppConfig::default()).unwrap();

    let result = service.analyze_file(&dir.path().join("missing.png"));

    assert!(matches!(
        result,
        Err(AppError::Image(ImageIoError::Read { .. }))
    ));
}
