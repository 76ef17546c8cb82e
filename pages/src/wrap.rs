//! Word wrapping against an estimated glyph width.
//!
//! There are no font metrics here. Every character is assumed to advance
//! `font_size * char_width_ratio` units, which is close enough for the
//! hand-drawn face the canvas uses.

#[cfg(test)]
#[path = "wrap_test.rs"]
mod wrap_test;

use crate::consts::CHAR_WIDTH_RATIO;

/// Width estimator parameterized by the per-character advance ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub char_width_ratio: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { char_width_ratio: CHAR_WIDTH_RATIO }
    }
}

/// Result of wrapping one block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped {
    /// Display lines, in order. Never empty.
    pub lines: Vec<String>,
    /// Character count of the longest line.
    pub widest: usize,
}

impl TextMetrics {
    /// Advance of a single character at `font_size`.
    #[must_use]
    pub fn char_width(&self, font_size: f64) -> f64 {
        font_size * self.char_width_ratio
    }

    /// Estimated rendered width of `text`.
    #[must_use]
    pub fn width(&self, text: &str, font_size: f64) -> f64 {
        self.width_of_chars(text.chars().count(), font_size)
    }

    /// Estimated rendered width of a line `chars` characters long.
    #[must_use]
    pub fn width_of_chars(&self, chars: usize, font_size: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let chars = chars as f64;
        chars * self.char_width(font_size)
    }

    /// How many characters fit in `max_width` at `font_size`.
    #[must_use]
    pub fn chars_per_line(&self, font_size: f64, max_width: f64) -> usize {
        let char_width = self.char_width(font_size);
        if char_width <= 0.0 || !max_width.is_finite() || max_width <= 0.0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let fit = (max_width / char_width).floor() as usize;
        fit
    }

    /// Greedily pack the words of `text` into lines no wider than `max_width`.
    ///
    /// Words are separated by any whitespace run and joined back with single
    /// spaces. A word that alone exceeds `max_width` is placed on its own
    /// line, unsplit. Empty text yields one empty line.
    #[must_use]
    pub fn wrap(&self, text: &str, font_size: f64, max_width: f64) -> Wrapped {
        let limit = self.chars_per_line(font_size, max_width);
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > limit {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                lines.push(word.to_owned());
                continue;
            }

            let joined_len = if current.is_empty() { word_len } else { current_len + 1 + word_len };
            if joined_len <= limit {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = joined_len;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(word);
                current_len = word_len;
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }

        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Wrapped { lines, widest }
    }
}

/// [`TextMetrics::width`] with the default ratio.
#[must_use]
pub fn estimated_width(text: &str, font_size: f64) -> f64 {
    TextMetrics::default().width(text, font_size)
}

/// [`TextMetrics::wrap`] with the default ratio.
#[must_use]
pub fn wrap(text: &str, font_size: f64, max_width: f64) -> Wrapped {
    TextMetrics::default().wrap(text, font_size, max_width)
}
