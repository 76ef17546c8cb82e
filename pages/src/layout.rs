//! Page compiler: turns a Markdown document into a grouped list of drawing
//! primitives ready for the canvas host.
//!
//! DESIGN
//! ======
//! Compilation runs in two passes over the classified blocks.
//!
//! The measure pass wraps every text block and records each display line's
//! vertical offset from the top of the content area. Wrapping starts at the
//! base content width; when a block holds a word wider than that, the width
//! grows to fit it and every later block wraps at the grown width. The page
//! never clips or hyphenates.
//!
//! The emit pass only translates measured offsets into canvas coordinates,
//! so the page height computed by the measure pass is exactly the height the
//! emitted primitives occupy.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use rand::Rng;

use crate::block::{self, Block, BlockKind};
use crate::config::{BlockStyle, LayoutConfig};
use crate::consts::{INK, MAX_JITTER, PAGE_STROKE_WIDTH, PAPER, TEXT_BOX_SLACK, TEXT_STROKE_WIDTH, TRANSPARENT};
use crate::error::LayoutError;
use crate::group::GroupId;
use crate::primitive::{Paint, Primitive, PrimitiveKind, TextRun};
use crate::viewport::Point;

/// One wrapped display line and where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub kind: BlockKind,
    pub text: String,
    pub style: BlockStyle,
    /// Offset of the line's top from the top of the content area.
    pub offset: f64,
}

/// Something the emit pass draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Placed {
    Text(LayoutLine),
    /// Horizontal rule at this offset from the top of the content area.
    Rule { offset: f64 },
}

/// Output of the measure pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub items: Vec<Placed>,
    /// Sum of every block's vertical contribution.
    pub content_height: f64,
    /// Widest content seen, never less than the base content width.
    pub content_width: f64,
}

impl Measurement {
    /// Page width: base width, or wider if content demands it.
    #[must_use]
    pub fn page_width(&self, config: &LayoutConfig) -> f64 {
        f64::max(config.base_page_width, self.content_width + config.padding.horizontal())
    }

    /// Page height: content plus top and bottom padding.
    #[must_use]
    pub fn page_height(&self, config: &LayoutConfig) -> f64 {
        self.content_height + config.padding.vertical()
    }
}

/// A compiled page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Shared by every primitive in `primitives`.
    pub group_id: GroupId,
    /// Background rectangle first, then content in document order.
    pub primitives: Vec<Primitive>,
    /// Rounded, jittered center minus the requested center. Zero unless
    /// jitter is enabled.
    pub jitter: Point,
}

impl Page {
    /// The background rectangle.
    #[must_use]
    pub fn background(&self) -> Option<&Primitive> {
        self.primitives.first()
    }

    /// Text and rule primitives, without the background.
    #[must_use]
    pub fn content(&self) -> &[Primitive] {
        self.primitives.get(1..).unwrap_or(&[])
    }
}

/// Wrap and stack `blocks`, recording where every line lands.
#[must_use]
pub fn measure(blocks: &[Block], config: &LayoutConfig) -> Measurement {
    let metrics = config.metrics();
    let mut content_width = config.content_width();
    let mut cursor = 0.0;
    let mut items = Vec::new();

    for block in blocks {
        match block.kind {
            BlockKind::Empty => {
                cursor += config.empty_gap();
            }
            BlockKind::Divider => {
                items.push(Placed::Rule { offset: cursor });
                cursor += config.divider_gap;
            }
            kind @ (BlockKind::Heading | BlockKind::Quote | BlockKind::Memo | BlockKind::Paragraph) => {
                let style = config.style(kind);
                let wrapped = metrics.wrap(&block.text, style.font_size, content_width);
                content_width = f64::max(content_width, metrics.width_of_chars(wrapped.widest, style.font_size));

                for text in wrapped.lines {
                    items.push(Placed::Text(LayoutLine { kind, text, style, offset: cursor }));
                    cursor += style.font_size + config.line_spacing;
                }
                if kind == BlockKind::Heading {
                    cursor += config.heading_gap;
                }
            }
        }
    }

    Measurement { items, content_height: cursor, content_width }
}

/// Compile `document` into a page centered on `center`.
///
/// `config` is used as given. Run [`LayoutConfig::validate`] on configs
/// built by hand first; [`crate::board::Board`] does so on construction.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidArgument`] if `center` is not finite.
pub fn compile(document: &str, center: Point, config: &LayoutConfig) -> Result<Page, LayoutError> {
    let requested = center.validated()?;
    let center = if config.jitter {
        let offset = random_jitter();
        Point::new(round_hundredths(requested.x + offset.x), round_hundredths(requested.y + offset.y))
    } else {
        requested
    };
    let jitter = Point::new(center.x - requested.x, center.y - requested.y);

    let blocks = block::parse(document);
    let measurement = measure(&blocks, config);
    let group_id = GroupId::generate();
    let primitives = emit(&measurement, center, config, &group_id);

    tracing::debug!(
        group_id = %group_id,
        blocks = blocks.len(),
        primitives = primitives.len(),
        width = measurement.page_width(config),
        height = measurement.page_height(config),
        "compiled markdown page"
    );

    Ok(Page { group_id, primitives, jitter })
}

/// Compile a loosely typed document.
///
/// Anything other than a JSON string compiles as the empty document.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidArgument`] if `center` is not finite.
pub fn compile_value(document: &serde_json::Value, center: Point, config: &LayoutConfig) -> Result<Page, LayoutError> {
    let text = if let Some(text) = document.as_str() {
        text
    } else {
        tracing::warn!(received = %value_kind(document), "markdown document is not a string; using empty document");
        ""
    };
    compile(text, center, config)
}

fn emit(measurement: &Measurement, center: Point, config: &LayoutConfig, group_id: &GroupId) -> Vec<Primitive> {
    let width = measurement.page_width(config);
    let height = measurement.page_height(config);
    let left = center.x - width / 2.0;
    let top = center.y - height / 2.0;
    let content_left = left + config.padding.left;
    let content_top = top + config.padding.top;
    let content_width = width - config.padding.horizontal();

    let mut primitives = Vec::with_capacity(measurement.items.len() + 1);
    primitives.push(
        Primitive::new(PrimitiveKind::Rectangle, left, top, width, height)
            .with_paint(Paint { stroke: INK, fill: PAPER }, PAGE_STROKE_WIDTH)
            .in_group(group_id),
    );

    for item in &measurement.items {
        let primitive = match item {
            Placed::Rule { offset } => {
                Primitive::new(PrimitiveKind::Line, content_left, content_top + offset, content_width, 0.0)
                    .with_paint(Paint { stroke: INK, fill: TRANSPARENT }, PAGE_STROKE_WIDTH)
            }
            Placed::Text(line) => Primitive::new(
                PrimitiveKind::Text,
                content_left,
                content_top + line.offset,
                content_width,
                text_box_height(line.style.font_size, config),
            )
            .with_paint(line.style.paint, TEXT_STROKE_WIDTH)
            .with_text(TextRun::new(line.text.as_str(), line.style.font_size)),
        };
        primitives.push(primitive.in_group(group_id));
    }

    primitives
}

/// Height of a text box: a little taller than the glyphs, but never reaching
/// past the space its line reserved plus the bottom padding.
fn text_box_height(font_size: f64, config: &LayoutConfig) -> f64 {
    font_size + f64::min(TEXT_BOX_SLACK, config.line_spacing + config.padding.bottom)
}

fn random_jitter() -> Point {
    let mut rng = rand::rng();
    Point::new(rng.random_range(-MAX_JITTER..=MAX_JITTER), rng.random_range(-MAX_JITTER..=MAX_JITTER))
}

/// Jittered centers land on a 0.01 grid.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
