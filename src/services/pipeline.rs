use braille_core::BrailleConverter;
use std::path::Path;

use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::rendering::DecodedImage;

/// Result from running the conversion pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Rendered Braille text, without a trailing newline
    pub text: String,
    /// Pixel width after fitting to the character limit
    pub width: u32,
    /// Pixel height after fitting to the character limit
    pub height: u32,
}

/// Conversion pipeline that orchestrates decode → fit → convert
///
/// The pipeline owns one converter, so its color-distance cache is shared by
/// every image converted through it.
pub struct ConversionPipeline {
    config: AppConfig,
    converter: BrailleConverter,
}

impl ConversionPipeline {
    /// Build a pipeline, rejecting invalid settings before any image is read.
    pub fn new(config: AppConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        let converter = BrailleConverter::new()
            .tolerance(config.tolerance)
            .invert(config.invert)
            .threshold_method(config.threshold_method)
            .color_method(config.color_method);
        converter.threshold()?;

        tracing::debug!(
            tolerance = config.tolerance,
            invert = config.invert,
            threshold_method = %config.threshold_method,
            color_method = %config.color_method,
            limit = config.limit,
            "Conversion pipeline ready"
        );

        Ok(Self { config, converter })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Convert an image file
    pub fn convert_path(&mut self, path: &Path) -> Result<ConversionResult, ConvertError> {
        let image = DecodedImage::open(path)?;
        self.convert_image(image)
    }

    /// Convert an encoded image held in memory
    pub fn convert_bytes(&mut self, bytes: &[u8]) -> Result<ConversionResult, ConvertError> {
        let image = DecodedImage::from_bytes(bytes)?;
        self.convert_image(image)
    }

    /// Fit a decoded image to the character limit and convert it
    pub fn convert_image(&mut self, image: DecodedImage) -> Result<ConversionResult, ConvertError> {
        let image = image.fit_to_limit(self.config.limit)?;
        let (width, height) = image.dimensions();
        let text = self.converter.convert(&image)?;

        tracing::debug!(
            width,
            height,
            text_len = text.len(),
            cache_len = self.converter.cache_len(),
            "Image converted"
        );

        Ok(ConversionResult {
            text,
            width,
            height,
        })
    }

    /// Number of memoized color distances
    pub fn cache_len(&self) -> usize {
        self.converter.cache_len()
    }
}
