use braille_core::{Pixel, PixelSource};
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::Path;

use crate::error::ConvertError;

use super::budget::fit_dimensions;

/// A decoded 8-bit RGBA image, readable by the converter.
///
/// Animated formats contribute only their first frame.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    /// Decode an image file, detecting the format from its contents.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let image = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Decoded image file"
        );
        Self::from_rgba(image.to_rgba8())
    }

    /// Decode an in-memory encoded image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConvertError> {
        let image = image::load_from_memory(bytes)?;
        tracing::debug!(
            bytes = bytes.len(),
            width = image.width(),
            height = image.height(),
            "Decoded image bytes"
        );
        Self::from_rgba(image.to_rgba8())
    }

    /// Wrap an already decoded buffer.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, ConvertError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ConvertError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Downscale with a Lanczos3 filter so the output fits `limit`
    /// characters. Returns `self` unchanged when it already fits.
    pub fn fit_to_limit(self, limit: u64) -> Result<Self, ConvertError> {
        let (width, height) = self.dimensions();
        let (fit_width, fit_height) = fit_dimensions(width, height, limit)?;
        if (fit_width, fit_height) == (width, height) {
            return Ok(self);
        }
        let pixels = image::imageops::resize(&self.pixels, fit_width, fit_height, FilterType::Lanczos3);
        Ok(Self { pixels })
    }

    pub fn into_inner(self) -> RgbaImage {
        self.pixels
    }
}

impl PixelSource for DecodedImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        Pixel::from(self.pixels.get_pixel(x, y).0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_from_bytes_round_trips_pixels() {
        let mut image = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        image.put_pixel(2, 1, Rgba([10, 20, 30, 40]));
        let decoded = DecodedImage::from_bytes(&encode_png(&image)).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.pixel(2, 1), Pixel::new(10, 20, 30, 40));
        assert_eq!(decoded.pixel(0, 0), Pixel::new(255, 255, 255, 255));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = DecodedImage::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn test_open_detects_format_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picture.bin");
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        std::fs::write(&path, encode_png(&image)).unwrap();

        let decoded = DecodedImage::open(&path).unwrap();
        assert_eq!(decoded.dimensions(), (4, 4));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DecodedImage::open(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = DecodedImage::from_rgba(RgbaImage::new(0, 5)).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyImage { width: 0, height: 5 }));
    }

    #[test]
    fn test_fit_to_limit() {
        let image = DecodedImage::from_rgba(RgbaImage::new(200, 100)).unwrap();
        let unchanged = image.clone().fit_to_limit(1_000_000).unwrap();
        assert_eq!(unchanged.dimensions(), (200, 100));

        let fitted = image.fit_to_limit(100).unwrap();
        let (w, h) = fitted.dimensions();
        assert!(crate::rendering::char_cost(w, h) <= 100);
        assert_eq!(fitted.width(), w);
    }
}
