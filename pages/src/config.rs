//! Layout configuration.
//!
//! Defaults carry the page metrics the canvas has always used. A config can
//! be deserialized from JSON (every field optional) and overlaid from
//! `PAGE_*` environment variables:
//!
//! - `PAGE_BASE_WIDTH`: minimum page width (default 650)
//! - `PAGE_PADDING`: padding on all four sides (default 40)
//! - `PAGE_LINE_SPACING`: gap after each line (default 10)
//! - `PAGE_HEADING_FONT_SIZE` / `PAGE_QUOTE_FONT_SIZE` / `PAGE_MEMO_FONT_SIZE` /
//!   `PAGE_PARAGRAPH_FONT_SIZE`: 36 / 20 / 20 / 24
//! - `PAGE_CHAR_WIDTH_RATIO`: glyph advance per font-size unit (default 0.7)
//! - `PAGE_JITTER`: `true` to nudge new pages off-center by up to one unit

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::block::BlockKind;
use crate::consts::{
    BASE_PAGE_WIDTH, CALLOUT_FILL, CHAR_WIDTH_RATIO, DIVIDER_GAP, HEADING_FONT_SIZE, HEADING_GAP, INK, LINE_SPACING,
    MEMO_FONT_SIZE, MEMO_INK, PAGE_PADDING, PARAGRAPH_FONT_SIZE, QUOTE_FONT_SIZE, QUOTE_INK, TRANSPARENT,
};
use crate::error::ConfigError;
use crate::primitive::Paint;
use crate::wrap::TextMetrics;

/// Space between the page edge and its content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(PAGE_PADDING)
    }
}

/// Font size per text block kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub heading: f64,
    pub quote: f64,
    pub memo: f64,
    pub paragraph: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            heading: HEADING_FONT_SIZE,
            quote: QUOTE_FONT_SIZE,
            memo: MEMO_FONT_SIZE,
            paragraph: PARAGRAPH_FONT_SIZE,
        }
    }
}

/// How a block kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub font_size: f64,
    pub paint: Paint,
}

/// Page layout parameters passed explicitly to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub base_page_width: f64,
    pub padding: Padding,
    pub line_spacing: f64,
    pub heading_gap: f64,
    pub divider_gap: f64,
    pub font_sizes: FontSizes,
    pub char_width_ratio: f64,
    pub jitter: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_page_width: BASE_PAGE_WIDTH,
            padding: Padding::default(),
            line_spacing: LINE_SPACING,
            heading_gap: HEADING_GAP,
            divider_gap: DIVIDER_GAP,
            font_sizes: FontSizes::default(),
            char_width_ratio: CHAR_WIDTH_RATIO,
            jitter: false,
        }
    }
}

impl LayoutConfig {
    /// Defaults overlaid with `PAGE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable does not parse or the result
    /// fails [`LayoutConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(env_var)
    }

    /// Parse a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON or invalid values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from a key lookup (the environment, in production).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] for unparseable values, any error from
    /// `lookup`, or any [`LayoutConfig::validate`] failure.
    pub fn overlay(
        mut self,
        lookup: impl Fn(&str) -> Result<Option<String>, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let number = |key: &str| -> Result<Option<f64>, ConfigError> {
            lookup(key)?
                .map(|raw| parse_f64(key, &raw))
                .transpose()
        };

        if let Some(v) = number("PAGE_BASE_WIDTH")? {
            self.base_page_width = v;
        }
        if let Some(v) = number("PAGE_PADDING")? {
            self.padding = Padding::uniform(v);
        }
        if let Some(v) = number("PAGE_LINE_SPACING")? {
            self.line_spacing = v;
        }
        if let Some(v) = number("PAGE_HEADING_FONT_SIZE")? {
            self.font_sizes.heading = v;
        }
        if let Some(v) = number("PAGE_QUOTE_FONT_SIZE")? {
            self.font_sizes.quote = v;
        }
        if let Some(v) = number("PAGE_MEMO_FONT_SIZE")? {
            self.font_sizes.memo = v;
        }
        if let Some(v) = number("PAGE_PARAGRAPH_FONT_SIZE")? {
            self.font_sizes.paragraph = v;
        }
        if let Some(v) = number("PAGE_CHAR_WIDTH_RATIO")? {
            self.char_width_ratio = v;
        }
        if let Some(raw) = lookup("PAGE_JITTER")? {
            self.jitter = parse_bool("PAGE_JITTER", &raw)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check that every size is usable for layout.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("basePageWidth", self.base_page_width)?;
        positive("charWidthRatio", self.char_width_ratio)?;
        positive("fontSizes.heading", self.font_sizes.heading)?;
        positive("fontSizes.quote", self.font_sizes.quote)?;
        positive("fontSizes.memo", self.font_sizes.memo)?;
        positive("fontSizes.paragraph", self.font_sizes.paragraph)?;
        non_negative("padding.top", self.padding.top)?;
        non_negative("padding.right", self.padding.right)?;
        non_negative("padding.bottom", self.padding.bottom)?;
        non_negative("padding.left", self.padding.left)?;
        non_negative("lineSpacing", self.line_spacing)?;
        non_negative("headingGap", self.heading_gap)?;
        non_negative("dividerGap", self.divider_gap)?;

        if self.content_width() <= 0.0 {
            return Err(ConfigError::NoContentWidth {
                padding: self.padding.horizontal(),
                width: self.base_page_width,
            });
        }
        Ok(())
    }

    /// Content width of a page that has not grown.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.base_page_width - self.padding.horizontal()
    }

    #[must_use]
    pub fn metrics(&self) -> TextMetrics {
        TextMetrics { char_width_ratio: self.char_width_ratio }
    }

    /// Vertical space an empty line takes.
    #[must_use]
    pub fn empty_gap(&self) -> f64 {
        self.line_spacing * 2.0
    }

    /// Font size and paint for a text block kind.
    #[must_use]
    pub fn style(&self, kind: BlockKind) -> BlockStyle {
        match kind {
            BlockKind::Heading => BlockStyle {
                font_size: self.font_sizes.heading,
                paint: Paint { stroke: INK, fill: TRANSPARENT },
            },
            BlockKind::Quote => BlockStyle {
                font_size: self.font_sizes.quote,
                paint: Paint { stroke: QUOTE_INK, fill: CALLOUT_FILL },
            },
            BlockKind::Memo => BlockStyle {
                font_size: self.font_sizes.memo,
                paint: Paint { stroke: MEMO_INK, fill: CALLOUT_FILL },
            },
            BlockKind::Paragraph | BlockKind::Divider | BlockKind::Empty => BlockStyle {
                font_size: self.font_sizes.paragraph,
                paint: Paint { stroke: INK, fill: TRANSPARENT },
            },
        }
    }
}

/// Read one environment variable. Unset is `None`; a value that is not
/// valid Unicode is an error rather than silently unset.
///
/// # Errors
///
/// Returns [`ConfigError::Env`] if the value is not valid Unicode.
pub fn env_var(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Env {
            var: key.to_owned(),
            raw: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn parse_f64(key: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Env { var: key.to_owned(), raw: raw.to_owned() })
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Env { var: key.to_owned(), raw: raw.to_owned() }),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
