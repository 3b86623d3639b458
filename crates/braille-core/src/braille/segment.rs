//! A single Braille cell and the colors recorded for its dots.

use std::fmt;

use crate::api::BrailleError;
use crate::color::Color;

/// First codepoint of the Unicode Braille Patterns block.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Pixels covered by one segment horizontally.
pub const SEGMENT_WIDTH: u32 = 2;
/// Pixels covered by one segment vertically.
pub const SEGMENT_HEIGHT: u32 = 4;

/// Dot flag for each sub-position, indexed `[sub_x][sub_y]`.
///
/// Dots 1-3 and 4-6 run down the two columns; dots 7 and 8 were added
/// later for the bottom row, which is why they sit at the high bits.
const FLAGS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// A 2x4 block of an image rendered as one Braille character.
///
/// Each of the eight dots is either set or clear; a set dot may carry the
/// color of the pixel that set it.
///
/// # Example
///
/// ```
/// use braille_core::{Color, Segment};
///
/// let mut segment = Segment::new();
/// segment.plot(0, 0, Color::new(255, 0, 0));
/// segment.plot(1, 3, Color::new(0, 0, 255));
///
/// assert_eq!(segment.mask(), 0x81);
/// assert_eq!(segment.as_char(), '\u{2881}');
/// assert_eq!(segment.average_color().unwrap(), Color::new(127, 0, 127));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    mask: u8,
    /// Indexed by bit position of the flag.
    colors: [Option<Color>; 8],
}

impl Segment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dot flag for a sub-position.
    ///
    /// # Panics
    ///
    /// Panics if `sub_x >= 2` or `sub_y >= 4`.
    #[inline]
    pub fn flag_for(sub_x: u32, sub_y: u32) -> u8 {
        FLAGS[sub_x as usize][sub_y as usize]
    }

    #[inline]
    fn slot(flag: u8) -> usize {
        flag.trailing_zeros() as usize
    }

    /// Raw dot mask.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Whether the dot at a sub-position is set.
    #[inline]
    pub fn is_set(&self, sub_x: u32, sub_y: u32) -> bool {
        self.mask & Self::flag_for(sub_x, sub_y) != 0
    }

    /// Set the dot at a sub-position and record its color.
    pub fn plot(&mut self, sub_x: u32, sub_y: u32, color: Color) {
        let flag = Self::flag_for(sub_x, sub_y);
        self.mask |= flag;
        self.colors[Self::slot(flag)] = Some(color);
    }

    /// Clear the dot at a sub-position and forget its color.
    pub fn unplot(&mut self, sub_x: u32, sub_y: u32) {
        let flag = Self::flag_for(sub_x, sub_y);
        self.mask &= !flag;
        self.colors[Self::slot(flag)] = None;
    }

    /// Set all eight dots, each colored `color`.
    pub fn fill(&mut self, color: Color) {
        self.mask = 0xFF;
        self.colors = [Some(color); 8];
    }

    /// Flip every dot.
    ///
    /// Dots that were set are cleared along with their colors, and dots
    /// that become set have no recorded color, so an inverted segment
    /// carries no colors until it is plotted again.
    pub fn invert(&mut self) {
        self.mask ^= 0xFF;
        // No dot keeps its state, so no recorded color survives.
        self.colors = [None; 8];
    }

    /// The Braille character for the current mask.
    #[inline]
    pub fn as_char(&self) -> char {
        // U+2800..=U+28FF are all assigned, so this never falls back.
        char::from_u32(BRAILLE_BASE + u32::from(self.mask)).unwrap_or('\u{2800}')
    }

    /// Colors recorded on set dots, in bit order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().flatten().copied()
    }

    /// Per-channel floor mean of the recorded colors.
    ///
    /// # Errors
    ///
    /// [`BrailleError::UndefinedAverage`] if no dot carries a color.
    pub fn average_color(&self) -> Result<Color, BrailleError> {
        let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
        for color in self.colors() {
            r += u32::from(color.r);
            g += u32::from(color.g);
            b += u32::from(color.b);
            n += 1;
        }
        if n == 0 {
            return Err(BrailleError::UndefinedAverage);
        }
        // Each quotient is at most 255.
        Ok(Color::new((r / n) as u8, (g / n) as u8, (b / n) as u8))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
