//! Braille cells and images.
//!
//! A Braille pattern character (U+2800..=U+28FF) has eight dots arranged
//! two wide and four tall, so each [`Segment`] covers a 2x4 block of
//! pixels and a [`BrailleImage`] of `w x h` pixels is `ceil(w/2)` by
//! `ceil(h/4)` characters.

mod image;
mod pixel;
mod segment;

pub use image::{BrailleImage, ALPHA_THRESHOLD};
pub use pixel::{Pixel, PixelSource, RgbaBuffer};
pub use segment::{Segment, BRAILLE_BASE, SEGMENT_HEIGHT, SEGMENT_WIDTH};
