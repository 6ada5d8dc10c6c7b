//! Text measurement used to size chips.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    pub family: String,
    pub size_px: f32,
    pub weight: u16,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self { family: "Roboto, sans-serif".to_string(), size_px: 15.0, weight: 400 }
    }
}

/// Pixel width of `text` rendered with `font`. Must be synchronous and side-effect free.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontStyle) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &FontStyle) -> f32,
{
    fn measure(&self, text: &str, font: &FontStyle) -> f32 {
        self(text, font)
    }
}

/// Approximates widths from an average glyph advance, for hosts without font metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageGlyphMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub em_ratio: f32,
    /// Padding, border and close button around the chip text.
    pub chrome_px: f32,
}

impl Default for AverageGlyphMeasurer {
    fn default() -> Self {
        Self { em_ratio: 0.55, chrome_px: 40.0 }
    }
}

impl TextMeasurer for AverageGlyphMeasurer {
    fn measure(&self, text: &str, font: &FontStyle) -> f32 {
        text.chars().count() as f32 * font.size_px * self.em_ratio + self.chrome_px
    }
}
