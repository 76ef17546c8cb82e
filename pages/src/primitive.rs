//! Drawing primitives handed to the canvas host.
//!
//! A [`Primitive`] mirrors the element shape the drawing host accepts:
//! geometry, stroke and fill, the group ids binding it to its page, and for
//! text elements the text run and its typography. Field names serialize in
//! camelCase so the host can ingest them without translation.

#[cfg(test)]
#[path = "primitive_test.rs"]
mod primitive_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FONT_FAMILY, OPACITY, ROUGHNESS};
use crate::group::GroupId;

/// The element type of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Page background.
    Rectangle,
    /// One wrapped line of text.
    Text,
    /// Horizontal rule.
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Typography for text primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    pub font_size: f64,
    pub font_family: u8,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
}

impl TextRun {
    /// Left/top aligned run in the default font family.
    #[must_use]
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_family: FONT_FAMILY,
            text_align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
        }
    }
}

/// Stroke and fill of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub stroke: &'static str,
    pub fill: &'static str,
}

/// One positioned drawing element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primitive {
    #[serde(rename = "type")]
    pub kind: PrimitiveKind,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_color: String,
    pub background_color: String,
    pub stroke_width: f64,
    pub roughness: u8,
    pub opacity: u8,
    /// Groups this element belongs to, innermost first.
    pub group_ids: Vec<GroupId>,
    /// Present only on text primitives.
    #[serde(flatten)]
    pub text: Option<TextRun>,
}

impl Primitive {
    /// A primitive of `kind` covering the given box, with no text and no groups.
    #[must_use]
    pub fn new(kind: PrimitiveKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            stroke_color: String::new(),
            background_color: String::new(),
            stroke_width: 1.0,
            roughness: ROUGHNESS,
            opacity: OPACITY,
            group_ids: Vec::new(),
            text: None,
        }
    }

    #[must_use]
    pub fn with_paint(mut self, paint: Paint, stroke_width: f64) -> Self {
        paint.stroke.clone_into(&mut self.stroke_color);
        paint.fill.clone_into(&mut self.background_color);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_text(mut self, run: TextRun) -> Self {
        self.text = Some(run);
        self
    }

    #[must_use]
    pub fn in_group(mut self, group: &GroupId) -> Self {
        self.group_ids.push(group.clone());
        self
    }

    /// The innermost group, if any.
    #[must_use]
    pub fn group_id(&self) -> Option<&GroupId> {
        self.group_ids.first()
    }

    /// Bottom edge in canvas coordinates.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Text content, or `""` for non-text primitives.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_ref().map_or("", |run| run.text.as_str())
    }

    /// Font size, for text primitives.
    #[must_use]
    pub fn font_size(&self) -> Option<f64> {
        self.text.as_ref().map(|run| run.font_size)
    }
}
