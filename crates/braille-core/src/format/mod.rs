//! Color formatters: wrap a glyph in the markup for its color.
//!
//! Every formatter implements [`ColorFormatter`]. The terminal formatters
//! and [`Html`] quantize onto a fixed palette with a [`DifferenceCache`]
//! they own, so a formatter reused across conversions keeps its memoized
//! distances. [`ColorMethod`] selects one by name.
//!
//! # Example
//!
//! ```
//! use braille_core::{Color, ColorFormatter, ColorMethod};
//!
//! let mut formatter = ColorMethod::FourBitAnsi.formatter();
//! let text = formatter.render("x", Color::new(250, 10, 10));
//! assert_eq!(text, "\x1b[91mx\x1b[0m");
//! ```

mod ansi;
mod html;

use std::fmt;
use std::str::FromStr;

use crate::api::{BrailleError, ParseMethodError};
use crate::color::Color;
use crate::palette::DifferenceCache;

pub use ansi::{EightBitAnsi, FourBitAnsi, TrueColorAnsi, ANSI_RESET};
pub use html::{escape_html, Html};

/// Renders text in a color.
pub trait ColorFormatter {
    /// Wrap `text` in markup for `color`.
    fn render(&mut self, text: &str, color: Color) -> String;

    /// Like [`render`](Self::render) for an untyped color.
    ///
    /// # Errors
    ///
    /// [`BrailleError::InvalidColor`] unless `components` is exactly three
    /// values in `0..=255`.
    fn render_components(&mut self, text: &str, components: &[i64]) -> Result<String, BrailleError> {
        let color = Color::try_from(components)?;
        Ok(self.render(text, color))
    }

    /// The method this formatter implements.
    fn method(&self) -> ColorMethod;

    /// Distance cache backing palette quantization, if any.
    fn cache(&self) -> Option<&DifferenceCache> {
        None
    }

    /// Reset the distance cache. No-op for formatters without one.
    fn clear_cache(&mut self) {}
}

/// Emits text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl ColorFormatter for Plaintext {
    fn render(&mut self, text: &str, _color: Color) -> String {
        text.to_string()
    }

    fn method(&self) -> ColorMethod {
        ColorMethod::None
    }
}

/// How output is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMethod {
    /// Plain Braille text.
    #[default]
    None,
    /// Nearest of the 16 standard terminal colors.
    FourBitAnsi,
    /// Nearest of the 256 extended terminal colors.
    EightBitAnsi,
    /// Exact 24-bit terminal color.
    TrueColorAnsi,
    /// HTML spans with the nearest CSS color name.
    Html,
}

impl ColorMethod {
    pub const ALL: [ColorMethod; 5] = [
        ColorMethod::None,
        ColorMethod::FourBitAnsi,
        ColorMethod::EightBitAnsi,
        ColorMethod::TrueColorAnsi,
        ColorMethod::Html,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ColorMethod::None => "none",
            ColorMethod::FourBitAnsi => "four_bit_ansi",
            ColorMethod::EightBitAnsi => "eight_bit_ansi",
            ColorMethod::TrueColorAnsi => "true_color_ansi",
            ColorMethod::Html => "html",
        }
    }

    fn alias(self) -> Option<&'static str> {
        match self {
            ColorMethod::FourBitAnsi => Some("4bit"),
            ColorMethod::EightBitAnsi => Some("8bit"),
            ColorMethod::TrueColorAnsi => Some("truecolor"),
            ColorMethod::None | ColorMethod::Html => None,
        }
    }

    /// A fresh formatter for this method, with an empty cache.
    pub fn formatter(self) -> Box<dyn ColorFormatter> {
        match self {
            ColorMethod::None => Box::new(Plaintext),
            ColorMethod::FourBitAnsi => Box::new(FourBitAnsi::new()),
            ColorMethod::EightBitAnsi => Box::new(EightBitAnsi::new()),
            ColorMethod::TrueColorAnsi => Box::new(TrueColorAnsi),
            ColorMethod::Html => Box::new(Html::new()),
        }
    }
}

impl fmt::Display for ColorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMethod {
    type Err = ParseMethodError;

    /// Parse a method name case-insensitively; `-` is accepted for `_`
    /// and `4bit`, `8bit`, `truecolor` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ColorMethod::ALL
            .into_iter()
            .find(|m| wanted == m.name() || m.alias() == Some(wanted.as_str()))
            .ok_or_else(|| ParseMethodError {
                kind: "color method",
                name: s.to_string(),
                expected: "none, four_bit_ansi, eight_bit_ansi, true_color_ansi, html",
            })
    }
}
