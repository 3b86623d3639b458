//! HTML span formatter.

use crate::color::Color;
use crate::palette::{DifferenceCache, Population, PopulationKey, WEB_COLORS};

use super::{ColorFormatter, ColorMethod};

/// Escape the characters that are significant in HTML text content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps text in `<span style="color: NAME;">` using the nearest CSS
/// named color.
///
/// # Example
///
/// ```
/// use braille_core::{Color, ColorFormatter, Html};
///
/// let mut html = Html::new();
/// assert_eq!(
///     html.render("\u{28FF}", Color::new(250, 10, 10)),
///     "<span style=\"color: red;\">\u{28FF}</span>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Html {
    cache: DifferenceCache,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: DifferenceCache) -> Self {
        Self { cache }
    }

    pub fn into_cache(self) -> DifferenceCache {
        self.cache
    }

    /// Name of the CSS color nearest to `color`.
    pub fn color_name(&mut self, color: Color) -> &'static str {
        match self.cache.find_nearest(color, Population::Mapping(&WEB_COLORS)) {
            Ok(nearest) => match nearest.key {
                PopulationKey::Name(name) => name,
                PopulationKey::Index(i) => WEB_COLORS[i].0,
            },
            Err(_) => "inherit",
        }
    }
}

impl ColorFormatter for Html {
    fn render(&mut self, text: &str, color: Color) -> String {
        let name = self.color_name(color);
        format!("<span style=\"color: {name};\">{}</span>", escape_html(text))
    }

    fn method(&self) -> ColorMethod {
        ColorMethod::Html
    }

    fn cache(&self) -> Option<&DifferenceCache> {
        Some(&self.cache)
    }

    fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
