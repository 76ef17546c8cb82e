//! Editor-side line operations on Markdown source.
//!
//! These back the block buttons and shortcuts of the page editor: turning
//! the line under the cursor into a given block kind, and normalizing
//! marker spacing before a document is committed.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use std::str::FromStr;

/// Block kind a line can be turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarker {
    Heading,
    Quote,
    Memo,
    Divider,
    Paragraph,
}

/// Error returned when parsing an unknown [`BlockMarker`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block marker: {0:?}")]
pub struct UnknownMarker(pub String);

impl FromStr for BlockMarker {
    type Err = UnknownMarker;

    /// Accepts the marker itself (`#`, `>`, `>>`, `---`) or the block name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "#" | "heading" => Ok(Self::Heading),
            ">" | "quote" => Ok(Self::Quote),
            ">>" | "memo" => Ok(Self::Memo),
            "---" | "divider" => Ok(Self::Divider),
            "para" | "paragraph" => Ok(Self::Paragraph),
            _ => Err(UnknownMarker(s.to_owned())),
        }
    }
}

/// Result of a line rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub text: String,
    /// Byte offset just past the rewritten line.
    pub cursor: usize,
}

/// Rewrite the line containing `cursor` (a byte offset) as `marker`.
///
/// Any existing `#`/`>` markers on the line are dropped first, so switching
/// a quote to a memo yields `>> body`, not `>> > body`. A divider replaces
/// the whole line. Out-of-range or mid-character cursors are clamped back to
/// the nearest char boundary.
#[must_use]
pub fn apply_block(text: &str, cursor: usize, marker: BlockMarker) -> LineEdit {
    let cursor = floor_char_boundary(text, cursor);
    let line_start = text[..cursor].rfind('\n').map_or(0, |i| i + 1);
    let mut line_end = text[cursor..].find('\n').map_or(text.len(), |i| cursor + i);
    if text[line_start..line_end].ends_with('\r') {
        line_end -= 1;
    }

    let body = strip_markers(&text[line_start..line_end]);
    let line = match marker {
        BlockMarker::Heading => format!("# {body}"),
        BlockMarker::Quote => format!("> {body}"),
        BlockMarker::Memo => format!(">> {body}"),
        BlockMarker::Divider => "---".to_owned(),
        BlockMarker::Paragraph => body.to_owned(),
    };

    let mut out = String::with_capacity(text.len() + 3);
    out.push_str(&text[..line_start]);
    out.push_str(&line);
    out.push_str(&text[line_end..]);

    LineEdit { text: out, cursor: line_start + line.len() }
}

/// Normalize block markers line by line.
///
/// Trailing whitespace is trimmed, `\r\n` becomes `\n`, and a marker
/// followed by a body gets exactly one space: `#Title` and `###  Title`
/// become `# Title`, `>>note` becomes `>> note`, `>  q` becomes `> q`.
/// Markers with no body are left as typed.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.split('\n')
        .map(|line| sanitize_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte offset of UTF-16 code unit `units` in `text`, as a browser caret
/// index counts. An index inside a surrogate pair resolves to the start of
/// that character; past the end clamps to `text.len()`.
#[must_use]
pub fn byte_offset_from_utf16(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (byte, ch) in text.char_indices() {
        seen += ch.len_utf16();
        if seen > units {
            return byte;
        }
    }
    text.len()
}

/// UTF-16 code units before byte offset `byte`, the inverse of
/// [`byte_offset_from_utf16`].
#[must_use]
pub fn utf16_offset(text: &str, byte: usize) -> usize {
    text[..floor_char_boundary(text, byte)].encode_utf16().count()
}

fn sanitize_line(line: &str) -> String {
    let line = line.trim_end();

    let (marker, body) = if line.starts_with('#') {
        ("#", line.trim_start_matches('#'))
    } else if let Some(rest) = line.strip_prefix(">>") {
        (">>", rest)
    } else if let Some(rest) = line.strip_prefix('>') {
        (">", rest)
    } else {
        return line.to_owned();
    };

    let body = body.trim_start();
    if body.is_empty() {
        line.to_owned()
    } else {
        format!("{marker} {body}")
    }
}

fn strip_markers(line: &str) -> &str {
    line.trim_start().trim_start_matches(['#', '>']).trim_start()
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
