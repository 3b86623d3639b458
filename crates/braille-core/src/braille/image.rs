//! Grid of Braille segments covering a pixel image.

use std::fmt;

use tracing::debug;

use crate::api::BrailleError;
use crate::color::Color;
use crate::format::ColorFormatter;
use crate::threshold::Threshold;

use super::pixel::PixelSource;
use super::segment::{Segment, SEGMENT_HEIGHT, SEGMENT_WIDTH};

/// Pixels with alpha below this are treated as transparent and never plotted.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Line separator between rows of characters.
const LINE_SEPARATOR: char = '\n';

/// A pixel image stored as a row-major grid of [`Segment`]s.
///
/// Segment `(cx, cy)` lives at index `cx + cy * char_width` and covers
/// pixels `2cx..2cx+2` by `4cy..4cy+4`. Partial blocks at the right and
/// bottom edges still get a full segment.
///
/// # Example
///
/// ```
/// use braille_core::{BrailleImage, Color};
///
/// let mut image = BrailleImage::new(3, 5);
/// assert_eq!((image.char_width(), image.char_height()), (2, 2));
///
/// image.plot(0, 0, Color::new(0, 0, 0)).unwrap();
/// image.plot(2, 4, Color::new(0, 0, 0)).unwrap();
/// assert_eq!(image.to_string(), "\u{2801}\u{2800}\n\u{2800}\u{2801}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleImage {
    width: u32,
    height: u32,
    segments: Vec<Segment>,
}

impl BrailleImage {
    /// Blank image of `width x height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let count = width.div_ceil(SEGMENT_WIDTH) as usize * height.div_ceil(SEGMENT_HEIGHT) as usize;
        Self {
            width,
            height,
            segments: vec![Segment::new(); count],
        }
    }

    /// Build an image by thresholding every pixel of `source`.
    ///
    /// A pixel is plotted with its own color when its alpha is at least
    /// [`ALPHA_THRESHOLD`] and `threshold` includes it. Tolerance was
    /// validated when `threshold` was built, so this cannot fail.
    pub fn from_source<S: PixelSource + ?Sized>(source: &S, threshold: &Threshold) -> Self {
        let (width, height) = (source.width(), source.height());
        let mut image = Self::new(width, height);
        let mut plotted = 0usize;

        for y in 0..height {
            for x in 0..width {
                let pixel = source.pixel(x, y);
                if pixel.a < ALPHA_THRESHOLD {
                    continue;
                }
                let color = pixel.color();
                if threshold.includes(color) {
                    image.segment_mut_at(x, y).plot(x % SEGMENT_WIDTH, y % SEGMENT_HEIGHT, color);
                    plotted += 1;
                }
            }
        }

        debug!(
            width,
            height,
            segments = image.segments.len(),
            plotted,
            method = %threshold.method(),
            "Built braille image"
        );
        image
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width in characters, `ceil(width / 2)`.
    #[inline]
    pub fn char_width(&self) -> u32 {
        self.width.div_ceil(SEGMENT_WIDTH)
    }

    /// Height in characters, `ceil(height / 4)`.
    #[inline]
    pub fn char_height(&self) -> u32 {
        self.height.div_ceil(SEGMENT_HEIGHT)
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<(), BrailleError> {
        if x >= self.width || y >= self.height {
            return Err(BrailleError::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Segment containing pixel `(x, y)`. Caller checks bounds.
    #[inline]
    fn segment_mut_at(&mut self, x: u32, y: u32) -> &mut Segment {
        let index = (x / SEGMENT_WIDTH) as usize
            + (y / SEGMENT_HEIGHT) as usize * self.char_width() as usize;
        &mut self.segments[index]
    }

    /// Set the dot for pixel `(x, y)` and record its color.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidCoordinate`] if `(x, y)` is outside the image.
    pub fn plot(&mut self, x: u32, y: u32, color: Color) -> Result<(), BrailleError> {
        self.check_bounds(x, y)?;
        self.segment_mut_at(x, y)
            .plot(x % SEGMENT_WIDTH, y % SEGMENT_HEIGHT, color);
        Ok(())
    }

    /// Clear the dot for pixel `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidCoordinate`] if `(x, y)` is outside the image.
    pub fn unplot(&mut self, x: u32, y: u32) -> Result<(), BrailleError> {
        self.check_bounds(x, y)?;
        self.segment_mut_at(x, y)
            .unplot(x % SEGMENT_WIDTH, y % SEGMENT_HEIGHT);
        Ok(())
    }

    /// Set every dot of every segment to `color`.
    pub fn fill(&mut self, color: Color) {
        for segment in &mut self.segments {
            segment.fill(color);
        }
    }

    /// Flip every dot of every segment. See [`Segment::invert`].
    pub fn invert(&mut self) {
        for segment in &mut self.segments {
            segment.invert();
        }
    }

    /// Segment at character position `(cx, cy)`.
    pub fn segment(&self, cx: u32, cy: u32) -> Option<&Segment> {
        if cx >= self.char_width() || cy >= self.char_height() {
            return None;
        }
        self.segments
            .get(cx as usize + cy as usize * self.char_width() as usize)
    }

    /// All segments in row-major order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    /// Rows of segments, top to bottom.
    fn rows(&self) -> impl Iterator<Item = &[Segment]> + '_ {
        // chunks() rejects 0; an image with no columns has no segments anyway.
        self.segments.chunks(self.char_width().max(1) as usize)
    }

    /// Serialize with each segment passed through `formatter` in its
    /// average color.
    ///
    /// Segments with no recorded color are emitted as the bare glyph.
    /// Rows are joined with `\n`, with no trailing separator.
    pub fn render(&self, formatter: &mut dyn ColorFormatter) -> String {
        let mut out = String::with_capacity(self.segments.len() * 4 + self.char_height() as usize);
        let mut glyph = [0u8; 4];

        for (row, segments) in self.rows().enumerate() {
            if row > 0 {
                out.push(LINE_SEPARATOR);
            }
            for segment in segments {
                let text = segment.as_char().encode_utf8(&mut glyph);
                match segment.average_color() {
                    Ok(color) => out.push_str(&formatter.render(text, color)),
                    Err(_) => out.push_str(text),
                }
            }
        }
        out
    }
}

impl fmt::Display for BrailleImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, segments) in self.rows().enumerate() {
            if row > 0 {
                write!(f, "{LINE_SEPARATOR}")?;
            }
            for segment in segments {
                write!(f, "{}", segment.as_char())?;
            }
        }
        Ok(())
    }
}
