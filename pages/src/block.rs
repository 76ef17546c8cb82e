//! Block classifier for the page Markdown dialect.
//!
//! Only five block forms are recognized, one per line:
//!
//! | Prefix | Block |
//! |--------|-------|
//! | `# ` | Heading |
//! | `>> ` | Memo |
//! | `> ` | Quote |
//! | `---` (or more dashes) | Divider |
//! | anything else | Paragraph |
//!
//! A marker without its trailing space (`#`, `>`, `>>`) is plain paragraph
//! text.

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

use serde::{Deserialize, Serialize};

/// The kind of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Quote,
    Memo,
    Divider,
    Paragraph,
    /// Blank line. Adds vertical space only.
    Empty,
}

impl BlockKind {
    /// Whether blocks of this kind carry text to wrap and emit.
    #[must_use]
    pub fn has_text(self) -> bool {
        !matches!(self, Self::Divider | Self::Empty)
    }
}

/// One classified line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Line text with the block marker stripped. Empty for dividers and blank lines.
    pub text: String,
}

impl Block {
    fn bare(kind: BlockKind) -> Self {
        Self { kind, text: String::new() }
    }

    fn with_text(kind: BlockKind, text: &str) -> Self {
        Self { kind, text: text.to_owned() }
    }
}

/// Classify a single line. Surrounding whitespace is trimmed first.
#[must_use]
pub fn classify(line: &str) -> Block {
    let line = line.trim();

    if line.is_empty() {
        return Block::bare(BlockKind::Empty);
    }
    if is_divider(line) {
        return Block::bare(BlockKind::Divider);
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::with_text(BlockKind::Heading, rest);
    }
    if let Some(rest) = line.strip_prefix(">> ") {
        return Block::with_text(BlockKind::Memo, rest);
    }
    if let Some(rest) = line.strip_prefix("> ") {
        return Block::with_text(BlockKind::Quote, rest);
    }
    Block::with_text(BlockKind::Paragraph, line)
}

/// Three or more dashes and nothing else.
fn is_divider(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

/// Undo the literal `\n` escapes some editor hosts hand over.
#[must_use]
pub fn normalize(document: &str) -> String {
    document.replace("\\n", "\n")
}

/// Split a document into lines and classify each, in order.
///
/// Both `\n` and `\r\n` endings are accepted, as are literal `\n` escapes.
#[must_use]
pub fn parse(document: &str) -> Vec<Block> {
    let normalized = normalize(document);
    normalized.split('\n').map(classify).collect()
}
