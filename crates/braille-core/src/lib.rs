//! braille-core: render images as Unicode Braille text
//!
//! Each Braille pattern character packs a 2x4 grid of dots, so an image
//! maps onto a grid of characters at eight pixels per cell. A pixel becomes
//! a raised dot when its brightness falls below a tolerance; the color of a
//! cell is the average of the pixels that raised its dots, optionally
//! quantized onto a terminal or web palette with CIEDE2000.
//!
//! # Quick Start
//!
//! ```
//! use braille_core::{BrailleConverter, Pixel, RgbaBuffer};
//!
//! // 4x4 pixels: a black left half on a white background.
//! let mut source = RgbaBuffer::filled(4, 4, Pixel::new(255, 255, 255, 255));
//! for y in 0..4 {
//!     for x in 0..2 {
//!         source.put(x, y, Pixel::new(0, 0, 0, 255));
//!     }
//! }
//!
//! let mut converter = BrailleConverter::new();
//! assert_eq!(converter.convert(&source).unwrap(), "\u{28FF}\u{2800}");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelSource (RGBA, decoded and sized by the caller)
//!     |
//!     |  alpha >= 128 and (metric < tolerance) XOR invert
//!     v
//! BrailleImage (row-major Segments, one dot mask + colors each)
//!     |
//!     |  per segment: average color -> ColorFormatter
//!     v
//! String (rows joined by '\n', no trailing separator)
//! ```
//!
//! # Color Matching
//!
//! Palette quantization converts sRGB to CIELAB (D65) via XYZ and picks the
//! entry with the smallest CIEDE2000 distance. Distances are memoized in a
//! [`DifferenceCache`] owned by the formatter doing the quantization; the
//! cache is never global, and [`BrailleConverter::clear_cache`] resets it.

pub mod api;
pub mod braille;
pub mod color;
pub mod format;
pub mod palette;
pub mod threshold;


pub use api::{BrailleConverter, BrailleError, ParseMethodError, DEFAULT_TOLERANCE};
pub use braille::{BrailleImage, Pixel, PixelSource, RgbaBuffer, Segment};
pub use color::{ciede2000, inverse_srgb_companding, Color, Lab, Xyz};
pub use format::{
    ColorFormatter, ColorMethod, EightBitAnsi, FourBitAnsi, Html, Plaintext, TrueColorAnsi,
};
pub use palette::{DifferenceCache, Nearest, Population, PopulationKey};
pub use threshold::{Threshold, ThresholdMethod};
