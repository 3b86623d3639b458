//! End-to-end conversion through the library pipeline.

mod common;

use braille_core::{ColorMethod, ThresholdMethod};
use braillify::models::AppConfig;
use braillify::services::ConversionPipeline;
use common::*;
use image::Rgba;
use pretty_assertions::assert_eq;

fn pipeline(config: AppConfig) -> ConversionPipeline {
    ConversionPipeline::new(config).expect("valid config")
}

#[test]
fn test_white_block_is_blank() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_image("white.png", &solid(2, 4, WHITE));

    let result = pipeline(AppConfig::default()).convert_path(&path).unwrap();
    assert_eq!(result.text, EMPTY_CELL.to_string());
}

#[test]
fn test_black_block_is_full() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_image("black.png", &solid(2, 4, BLACK));

    let result = pipeline(AppConfig::default()).convert_path(&path).unwrap();
    assert_eq!(result.text, FULL_CELL.to_string());
}

#[test]
fn test_checkerboard_layout() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_image("checker.png", &checkerboard(6, 8));

    let result = pipeline(AppConfig::default()).convert_path(&path).unwrap();
    assert_eq!(
        result.text,
        "\u{28FF}\u{2800}\u{28FF}\n\u{2800}\u{28FF}\u{2800}"
    );
}

#[test]
fn test_partial_blocks_at_edges() {
    // 3x5 pixels: 2x2 cells, with the right column and bottom row partial.
    let result = pipeline(AppConfig::default())
        .convert_bytes(&png_bytes(&solid(3, 5, BLACK)))
        .unwrap();
    assert_eq!(result.text, "\u{28FF}\u{2847}\n\u{2809}\u{2801}");
}

#[test]
fn test_transparent_pixels_never_plotted() {
    let config = AppConfig {
        invert: true,
        ..AppConfig::default()
    };
    let result = pipeline(config)
        .convert_bytes(&png_bytes(&solid(2, 4, TRANSPARENT)))
        .unwrap();
    assert_eq!(result.text, EMPTY_CELL.to_string());
}

#[test]
fn test_invert_flips_decision() {
    let config = AppConfig {
        invert: true,
        ..AppConfig::default()
    };
    let result = pipeline(config)
        .convert_bytes(&png_bytes(&solid(2, 4, WHITE)))
        .unwrap();
    assert_eq!(result.text, FULL_CELL.to_string());
}

#[test]
fn test_threshold_methods_disagree_on_mid_gray() {
    // Gray 150: luminance ~0.35, lightness ~0.62
    let gray = png_bytes(&solid(2, 4, Rgba([150, 150, 150, 255])));

    let luminance = AppConfig {
        threshold_method: ThresholdMethod::Luminance,
        ..AppConfig::default()
    };
    let lightness = AppConfig {
        threshold_method: ThresholdMethod::Lightness,
        ..AppConfig::default()
    };

    assert_eq!(
        pipeline(luminance).convert_bytes(&gray).unwrap().text,
        FULL_CELL.to_string()
    );
    assert_eq!(
        pipeline(lightness).convert_bytes(&gray).unwrap().text,
        EMPTY_CELL.to_string()
    );
}

#[test]
fn test_true_color_output() {
    let config = AppConfig {
        color_method: ColorMethod::TrueColorAnsi,
        tolerance: 1.0,
        ..AppConfig::default()
    };
    let result = pipeline(config)
        .convert_bytes(&png_bytes(&solid(2, 4, RED)))
        .unwrap();
    assert_eq!(result.text, "\x1b[38;2;255;0;0m\u{28FF}\x1b[0m");
}

#[test]
fn test_html_output() {
    let config = AppConfig {
        color_method: ColorMethod::Html,
        tolerance: 1.0,
        ..AppConfig::default()
    };
    let mut image = solid(4, 4, RED);
    for y in 0..4 {
        for x in 2..4 {
            image.put_pixel(x, y, TRANSPARENT);
        }
    }
    let result = pipeline(config).convert_bytes(&png_bytes(&image)).unwrap();
    assert_eq!(
        result.text,
        "<span style=\"color: red;\">\u{28FF}</span>\u{2800}"
    );
}

#[test]
fn test_large_image_fits_limit() {
    let config = AppConfig {
        limit: 50,
        ..AppConfig::default()
    };
    let result = pipeline(config)
        .convert_bytes(&png_bytes(&checkerboard(400, 300)))
        .unwrap();

    assert!(result.text.chars().count() <= 50);
    assert!(!result.text.ends_with('\n'));
    assert!(result.width < 400 && result.height < 300);
}

#[test]
fn test_corrupt_input_is_decode_error() {
    let err = pipeline(AppConfig::default())
        .convert_bytes(b"\x89PNG\r\n\x1a\nnot really")
        .unwrap_err();
    assert!(matches!(err, braillify::error::ConvertError::Decode(_)));
}
