//! Document model: immutable snapshot of the source text

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// A read-only snapshot of the source text, split into logical lines.
///
/// Logical lines are delimited by explicit `'\n'` breaks; empty lines are
/// retained because they provide paragraph spacing. An empty source text
/// holds zero logical lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Logical lines in source order
    lines: Vec<String>,
    /// Content hash for change detection
    hash: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document snapshot from raw text
    pub fn from_text(text: &str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n').map(str::to_owned).collect()
        };

        Self {
            lines,
            hash: hash_text(text),
        }
    }

    /// Logical lines in source order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of logical lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no content at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Content hash of the snapshot
    pub fn content_hash(&self) -> u64 {
        self.hash
    }

    /// Rejoin the logical lines into the original text
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Hash text content for change detection
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
