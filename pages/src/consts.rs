//! Shared numeric and style constants for the pages crate.

// ── Page geometry ───────────────────────────────────────────────

/// Minimum page width in canvas units. Pages grow past this to fit content.
pub const BASE_PAGE_WIDTH: f64 = 650.0;

/// Padding between the page edge and its content, on every side.
pub const PAGE_PADDING: f64 = 40.0;

/// Vertical gap added after every wrapped line.
pub const LINE_SPACING: f64 = 10.0;

/// Extra gap after a heading block.
pub const HEADING_GAP: f64 = 10.0;

/// Vertical space consumed by a divider.
pub const DIVIDER_GAP: f64 = 20.0;

/// Extra height of a text box over its font size.
pub const TEXT_BOX_SLACK: f64 = 8.0;

// ── Typography ──────────────────────────────────────────────────

pub const HEADING_FONT_SIZE: f64 = 36.0;
pub const QUOTE_FONT_SIZE: f64 = 20.0;
pub const MEMO_FONT_SIZE: f64 = 20.0;
pub const PARAGRAPH_FONT_SIZE: f64 = 24.0;

/// Estimated glyph advance as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.7;

/// Host font family id (hand-drawn face).
pub const FONT_FAMILY: u8 = 1;

// ── Palette ─────────────────────────────────────────────────────

pub const INK: &str = "#000000";
pub const PAPER: &str = "#ffffff";
pub const TRANSPARENT: &str = "transparent";
pub const QUOTE_INK: &str = "#555555";
pub const MEMO_INK: &str = "#ff8383";
pub const CALLOUT_FILL: &str = "#f0f0f0";

pub const PAGE_STROKE_WIDTH: f64 = 2.0;
pub const TEXT_STROKE_WIDTH: f64 = 1.0;
pub const ROUGHNESS: u8 = 1;
pub const OPACITY: u8 = 100;

// ── Identity ────────────────────────────────────────────────────

/// Prefix of every generated group id.
pub const GROUP_ID_PREFIX: &str = "markdown-";

/// Largest center nudge, per axis, when jitter is enabled.
pub const MAX_JITTER: f64 = 1.0;
