//! Terminal color palettes.
//!
//! The 16-color palette uses the classic VGA approximations; the 256-color
//! palette extends it with a 6x6x6 color cube and a 24-step gray ramp.

use crate::color::Color;

/// A 4-bit ANSI color: its SGR foreground and background codes and the
/// RGB value used to match against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiColor {
    pub fg: u8,
    pub bg: u8,
    pub color: Color,
}

impl AnsiColor {
    const fn new(fg: u8, bg: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            fg,
            bg,
            color: Color::new(r, g, b),
        }
    }

    /// Foreground escape sequence.
    pub fn fg_escape(&self) -> String {
        format!("\x1b[{}m", self.fg)
    }

    /// Background escape sequence.
    pub fn bg_escape(&self) -> String {
        format!("\x1b[{}m", self.bg)
    }
}

/// 8 standard colors (SGR 30-37) followed by 8 bright colors (SGR 90-97).
pub const FOUR_BIT_ANSI: [AnsiColor; 16] = [
    AnsiColor::new(30, 40, 0, 0, 0),
    AnsiColor::new(31, 41, 170, 0, 0),
    AnsiColor::new(32, 42, 0, 170, 0),
    AnsiColor::new(33, 43, 128, 128, 0),
    AnsiColor::new(34, 44, 0, 0, 170),
    AnsiColor::new(35, 45, 170, 0, 170),
    AnsiColor::new(36, 46, 0, 170, 170),
    AnsiColor::new(37, 47, 170, 170, 170),
    AnsiColor::new(90, 100, 85, 85, 85),
    AnsiColor::new(91, 101, 255, 85, 85),
    AnsiColor::new(92, 102, 85, 255, 85),
    AnsiColor::new(93, 103, 255, 255, 85),
    AnsiColor::new(94, 104, 85, 85, 255),
    AnsiColor::new(95, 105, 255, 85, 255),
    AnsiColor::new(96, 106, 85, 255, 255),
    AnsiColor::new(97, 107, 255, 255, 255),
];

/// Start of the color cube within the 256-color palette.
pub const CUBE_OFFSET: usize = 16;
/// Start of the gray ramp within the 256-color palette.
pub const GRAY_OFFSET: usize = 232;
/// Step between adjacent cube levels (`5 * 51 == 255`).
const CUBE_STEP: u8 = 51;

/// The 256-color palette, indexed by its SGR `38;5;n` code.
///
/// - `0..16`: the [`FOUR_BIT_ANSI`] colors.
/// - `16..232`: a 6x6x6 cube. Index `16 + 36*r + 6*g + b` for
///   `r, g, b` in `0..6`; each level maps to `level * 51`, so the axes
///   run `0, 51, 102, 153, 204, 255`.
/// - `232..256`: grays `8 + 10*i` for `i` in `0..24` (8 through 238).
pub const EIGHT_BIT_ANSI: [Color; 256] = build_eight_bit();

const fn build_eight_bit() -> [Color; 256] {
    let mut table = [Color::new(0, 0, 0); 256];

    let mut i = 0;
    while i < FOUR_BIT_ANSI.len() {
        table[i] = FOUR_BIT_ANSI[i].color;
        i += 1;
    }

    let mut n = 0;
    while n < 216 {
        let r = (n / 36) as u8;
        let g = ((n / 6) % 6) as u8;
        let b = (n % 6) as u8;
        table[CUBE_OFFSET + n] = Color::new(r * CUBE_STEP, g * CUBE_STEP, b * CUBE_STEP);
        n += 1;
    }

    let mut step = 0;
    while step < 24 {
        let v = 8 + 10 * step as u8;
        table[GRAY_OFFSET + step] = Color::new(v, v, v);
        step += 1;
    }

    table
}
