//! Pixel access for image construction.

use crate::color::Color;

/// An 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque pixel of the given color.
    #[inline]
    pub const fn opaque(color: Color) -> Self {
        Self::new(color.r, color.g, color.b, 255)
    }

    /// The pixel's color with alpha dropped.
    #[inline]
    pub const fn color(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }
}

impl From<[u8; 4]> for Pixel {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// A decoded image the core can read pixels from.
///
/// Decoding and resizing happen outside this crate; anything exposing
/// dimensions and random access to RGBA pixels can be converted.
/// `pixel` is only called with `x < width()` and `y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel(&self, x: u32, y: u32) -> Pixel;
}

/// Row-major RGBA buffer implementing [`PixelSource`].
///
/// # Example
///
/// ```
/// use braille_core::{Pixel, PixelSource, RgbaBuffer};
///
/// let mut buffer = RgbaBuffer::new(2, 4);
/// buffer.put(1, 3, Pixel::new(255, 0, 0, 255));
/// assert_eq!(buffer.pixel(1, 3).r, 255);
/// assert_eq!(buffer.pixel(0, 0), Pixel::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl RgbaBuffer {
    /// A fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::default())
    }

    /// A buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major pixels. Returns `None` if the length does
    /// not match the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Overwrite one pixel. Panics if out of bounds.
    pub fn put(&mut self, x: u32, y: u32, pixel: Pixel) {
        let i = self.index(x, y);
        self.pixels[i] = pixel;
    }
}

impl PixelSource for RgbaBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.index(x, y)]
    }
}
