//! Test fixtures: small images written to temporary files.

use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub const EMPTY_CELL: char = '\u{2800}';
pub const FULL_CELL: char = '\u{28FF}';

/// A solid image of one color.
pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Alternating 2x4 blocks, black in the top-left corner.
pub fn checkerboard(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x / 2 + y / 4) % 2 == 0 {
            BLACK
        } else {
            WHITE
        }
    })
}

/// Temporary directory holding fixture images.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Save `image` as `name`, with the format taken from the extension.
    pub fn write_image(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.dir.path().join(name);
        image.save(&path).expect("Failed to save fixture image");
        path
    }

    /// Write a raw text file, e.g. a YAML config.
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}

/// Encode `image` as PNG bytes.
pub fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes.into_inner()
}
