//! End-to-end tests for loading, dithering and writing image files.

mod common;

use gbdither::error::RenderError;
use gbdither::models::{AppConfig, TargetSpec};
use gbdither::rendering::render_file;
use grey_dither::{DitherOptions, GreyPalette};
use pretty_assertions::assert_eq;

use common::{assert_only_levels, png_bit_depth, read_grey, Workspace};

#[test]
fn test_gbc_preset_from_gradient() {
    let ws = Workspace::new();
    let input = ws.gradient_png("ramp.png", 200, 100);
    let output = ws.path("out.png");

    let report = render_file(&input, &output, &TargetSpec::gbc(), DitherOptions::new()).unwrap();

    assert_eq!((report.width, report.height), (128, 112));
    assert_eq!(report.histogram.iter().sum::<usize>(), 128 * 112);
    assert!(
        report.histogram.iter().all(|&count| count > 0),
        "A full ramp should use every level: {:?}",
        report.histogram
    );
    assert_eq!(report.bytes, std::fs::metadata(&output).unwrap().len());

    assert_eq!(png_bit_depth(&output), 2);
    let img = read_grey(&output);
    assert_eq!(img.dimensions(), (128, 112));
    assert_only_levels(&img, &[0, 85, 170, 255]);
}

#[test]
fn test_irregular_palette_writes_8bit_levels() {
    let ws = Workspace::new();
    let input = ws.gradient_png("ramp.png", 64, 64);
    let output = ws.path("out.png");
    let target = TargetSpec::gbc().with_overrides(
        Some(32),
        Some(16),
        Some(GreyPalette::new(&[0, 100, 255]).unwrap()),
    );

    render_file(&input, &output, &target, DitherOptions::new()).unwrap();

    assert_eq!(png_bit_depth(&output), 8);
    let img = read_grey(&output);
    assert_eq!(img.dimensions(), (32, 16));
    assert_only_levels(&img, &[0, 100, 255]);
}

#[test]
fn test_flat_white_stays_white() {
    let ws = Workspace::new();
    let input = ws.flat_rgb("white.bmp", 40, 30, [255, 255, 255]);
    let output = ws.path("out.png");

    let report = render_file(&input, &output, &TargetSpec::gbc(), DitherOptions::new()).unwrap();

    assert_eq!(report.histogram, vec![0, 0, 0, 128 * 112]);
    let img = read_grey(&output);
    assert!(img.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn test_non_png_output_uses_extension() {
    let ws = Workspace::new();
    let input = ws.gradient_png("ramp.png", 50, 50);
    let output = ws.path("out.bmp");
    let target = TargetSpec::gbc().with_overrides(Some(20), Some(10), None);

    render_file(&input, &output, &target, DitherOptions::new()).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..2], b"BM");
    let img = read_grey(&output);
    assert_eq!(img.dimensions(), (20, 10));
    assert_only_levels(&img, &[0, 85, 170, 255]);
}

#[test]
fn test_wavefront_output_matches_raster() {
    let ws = Workspace::new();
    let input = ws.noise_png("noise.png", 90, 70, 7);
    let raster = ws.path("raster.png");
    let parallel = ws.path("parallel.png");
    let target = TargetSpec::gbc().with_overrides(Some(90), Some(70), None);

    render_file(&input, &raster, &target, DitherOptions::new()).unwrap();
    render_file(&input, &parallel, &target, DitherOptions::new().wavefront(true)).unwrap();

    assert_eq!(std::fs::read(&raster).unwrap(), std::fs::read(&parallel).unwrap());
}

#[test]
fn test_missing_input_is_an_error() {
    let ws = Workspace::new();
    let result = render_file(
        &ws.path("missing.png"),
        &ws.path("out.png"),
        &TargetSpec::gbc(),
        DitherOptions::new(),
    );

    assert!(matches!(result, Err(RenderError::Io(_))));
    assert!(!ws.path("out.png").exists());
}

#[test]
fn test_undecodable_input_is_a_decode_error() {
    let ws = Workspace::new();
    let input = ws.path("garbage.png");
    std::fs::write(&input, b"\x89PNG\r\n\x1a\nthis is not a png").unwrap();

    let result = render_file(&input, &ws.path("out.png"), &TargetSpec::gbc(), DitherOptions::new());
    assert!(matches!(result, Err(RenderError::Decode(_))));
}

#[test]
fn test_zero_sized_target_is_rejected() {
    let ws = Workspace::new();
    let input = ws.gradient_png("ramp.png", 10, 10);
    let target = TargetSpec::gbc().with_overrides(None, Some(0), None);

    let result = render_file(&input, &ws.path("out.png"), &target, DitherOptions::new());
    assert!(matches!(
        result,
        Err(RenderError::UnsupportedDimensions { width: 128, height: 0 })
    ));
}

#[test]
fn test_configured_preset() {
    let ws = Workspace::new();
    let config_path = ws.config(
        "default_preset: bw\npresets:\n  bw:\n    width: 24\n    height: 8\n    palette: [0, 255]\n",
    );
    let config = AppConfig::load(&config_path);
    let target = config.preset(config.default_preset_name()).unwrap();

    let input = ws.gradient_png("ramp.png", 48, 16);
    let output = ws.path("out.png");
    render_file(&input, &output, &target, DitherOptions::new()).unwrap();

    assert_eq!(png_bit_depth(&output), 1);
    let img = read_grey(&output);
    assert_eq!(img.dimensions(), (24, 8));
    assert_only_levels(&img, &[0, 255]);
}

#[test]
fn test_broken_config_falls_back_to_builtins() {
    let ws = Workspace::new();
    let config_path = ws.config("presets: [not, a, map]\n");
    let config = AppConfig::load(&config_path);

    assert_eq!(config.default_preset_name(), "gbc");
    assert_eq!(config.preset("gbc").unwrap(), TargetSpec::gbc());
}

#[test]
fn test_noise_fixture_is_seeded() {
    let ws = Workspace::new();
    let first = read_grey(&ws.noise_png("a.png", 16, 16, 42));
    let second = read_grey(&ws.noise_png("b.png", 16, 16, 42));
    let other = read_grey(&ws.noise_png("c.png", 16, 16, 43));

    assert_eq!(first, second);
    assert_ne!(first, other);
}
