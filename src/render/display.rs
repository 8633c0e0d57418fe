//! Fragment classification into render instructions

use crate::layout::Page;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An inline run of text within a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineSpan {
    pub text: String,
    pub bold: bool,
}

impl InlineSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            bold: false,
        }
    }

    fn strong(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            bold: true,
        }
    }
}

/// Inline spans of one fragment; most fragments hold a handful at most
pub type InlineSpans = SmallVec<[InlineSpan; 4]>;

/// A block-level render instruction for a single fragment.
///
/// Selected by prefix matching on the fragment text; this pass is
/// presentation-only and accepts whatever fragment stream the packer
/// emits without revisiting page boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockInstruction {
    /// Heading line: one to three `#` characters followed by a space
    Heading { level: u8, spans: InlineSpans },
    /// Ordered list item: leading digits followed by `.`
    OrderedItem { ordinal: u32, spans: InlineSpans },
    /// Unordered list item: leading `- `
    UnorderedItem { spans: InlineSpans },
    /// Plain paragraph text
    Paragraph { spans: InlineSpans },
    /// Blank-line spacing
    Spacer,
}

/// Classify one fragment into its block instruction
pub fn classify(fragment: &str) -> BlockInstruction {
    if fragment.is_empty() {
        return BlockInstruction::Spacer;
    }

    if let Some((level, rest)) = heading_prefix(fragment) {
        return BlockInstruction::Heading {
            level,
            spans: parse_spans(rest),
        };
    }

    if let Some((ordinal, rest)) = ordered_prefix(fragment) {
        return BlockInstruction::OrderedItem {
            ordinal,
            spans: parse_spans(rest),
        };
    }

    if let Some(rest) = fragment.strip_prefix("- ") {
        return BlockInstruction::UnorderedItem {
            spans: parse_spans(rest),
        };
    }

    BlockInstruction::Paragraph {
        spans: parse_spans(fragment),
    }
}

/// Build render instructions for every fragment on a page, in order
pub fn render_page(page: &Page) -> Vec<BlockInstruction> {
    page.fragments.iter().map(|f| classify(f)).collect()
}

/// Match `#`, `##` or `###` followed by a space
fn heading_prefix(fragment: &str) -> Option<(u8, &str)> {
    let hashes = fragment.bytes().take_while(|&b| b == b'#').count();
    if (1..=3).contains(&hashes) {
        fragment[hashes..]
            .strip_prefix(' ')
            .map(|rest| (hashes as u8, rest))
    } else {
        None
    }
}

/// Match leading digits followed by `.`; a single space after the dot is
/// consumed. Digit runs that overflow `u32` stay plain paragraphs.
fn ordered_prefix(fragment: &str) -> Option<(u32, &str)> {
    let digits = fragment.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = fragment[digits..].strip_prefix('.')?;
    let ordinal = fragment[..digits].parse().ok()?;
    Some((ordinal, rest.strip_prefix(' ').unwrap_or(rest)))
}

/// Split text into plain and `**bold**` spans; unbalanced markers are
/// kept as literal text.
fn parse_spans(text: &str) -> InlineSpans {
    let mut spans = InlineSpans::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let Some(close) = rest[open + 2..].find("**") else {
            break;
        };
        if open > 0 {
            spans.push(InlineSpan::plain(&rest[..open]));
        }
        spans.push(InlineSpan::strong(&rest[open + 2..open + 2 + close]));
        rest = &rest[open + 4 + close..];
    }

    if !rest.is_empty() {
        spans.push(InlineSpan::plain(rest));
    }

    spans
}
