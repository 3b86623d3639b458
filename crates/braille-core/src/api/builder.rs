//! BrailleConverter builder: the primary entry point for the crate.
//!
//! [`BrailleConverter`] pairs an inclusion policy with a color formatter
//! and keeps that formatter (and its distance cache) alive across calls.

use tracing::debug;

use crate::braille::{BrailleImage, PixelSource};
use crate::format::{ColorFormatter, ColorMethod};
use crate::threshold::{Threshold, ThresholdMethod};

use super::error::BrailleError;

/// Default inclusion tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// High-level converter from pixels to Braille text.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - The tolerance is checked by [`convert()`](Self::convert), before any
///   pixel is read
/// - The formatter is built once per color method, so repeated conversions
///   share one [`DifferenceCache`](crate::DifferenceCache)
///
/// # Example
///
/// ```
/// use braille_core::{BrailleConverter, ColorMethod, Pixel, RgbaBuffer};
///
/// let source = RgbaBuffer::filled(2, 4, Pixel::new(0, 0, 0, 255));
///
/// let mut converter = BrailleConverter::new()
///     .tolerance(0.5)
///     .color_method(ColorMethod::TrueColorAnsi);
///
/// let text = converter.convert(&source).unwrap();
/// assert_eq!(text, "\x1b[38;2;0;0;0m\u{28FF}\x1b[0m");
/// ```
pub struct BrailleConverter {
    threshold_method: ThresholdMethod,
    tolerance: f64,
    invert: bool,
    formatter: Box<dyn ColorFormatter>,
}

impl BrailleConverter {
    /// Luminance method, tolerance 0.5, not inverted, uncolored output.
    pub fn new() -> Self {
        Self {
            threshold_method: ThresholdMethod::default(),
            tolerance: DEFAULT_TOLERANCE,
            invert: false,
            formatter: ColorMethod::default().formatter(),
        }
    }

    /// Set the inclusion tolerance. Validated on [`convert()`](Self::convert).
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set whether the inclusion decision is inverted.
    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Set the brightness metric.
    #[inline]
    pub fn threshold_method(mut self, method: ThresholdMethod) -> Self {
        self.threshold_method = method;
        self
    }

    /// Set the color method.
    ///
    /// Switching to a different method replaces the formatter and with it
    /// the distance cache; re-selecting the current method keeps both.
    pub fn color_method(mut self, method: ColorMethod) -> Self {
        if self.formatter.method() != method {
            self.formatter = method.formatter();
        }
        self
    }

    /// Use a caller-built formatter, e.g. one wrapping a shared cache.
    pub fn formatter(mut self, formatter: Box<dyn ColorFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Validated threshold for the current settings.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidTolerance`] if the tolerance is outside `[0, 1]`.
    pub fn threshold(&self) -> Result<Threshold, BrailleError> {
        Threshold::new(self.threshold_method, self.tolerance, self.invert)
    }

    /// Build the Braille image for `source` without rendering it.
    pub fn image<S: PixelSource + ?Sized>(&self, source: &S) -> Result<BrailleImage, BrailleError> {
        let threshold = self.threshold()?;
        Ok(BrailleImage::from_source(source, &threshold))
    }

    /// Convert `source` to Braille text in the configured color method.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidTolerance`] if the tolerance is outside `[0, 1]`.
    pub fn convert<S: PixelSource + ?Sized>(&mut self, source: &S) -> Result<String, BrailleError> {
        let image = self.image(source)?;
        let text = image.render(self.formatter.as_mut());
        debug!(
            chars = image.char_width() * image.char_height(),
            color_method = %self.formatter.method(),
            cache_len = self.cache_len(),
            "Converted image"
        );
        Ok(text)
    }

    /// Current color method.
    pub fn current_color_method(&self) -> ColorMethod {
        self.formatter.method()
    }

    /// Drop every memoized distance.
    pub fn clear_cache(&mut self) {
        self.formatter.clear_cache();
    }

    /// Number of memoized distances (0 for methods without a cache).
    pub fn cache_len(&self) -> usize {
        self.formatter.cache().map_or(0, |cache| cache.len())
    }
}

impl Default for BrailleConverter {
    fn default() -> Self {
        Self::new()
    }
}
