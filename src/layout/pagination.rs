//! Page: the unit of print output

use crate::layout::cost::line_cost;
use serde::{Deserialize, Serialize};

/// One printed sheet: an ordered list of text fragments.
///
/// A fragment is a complete logical line, or a slice of one when the line
/// was split across a page boundary. Fragment order matches source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub fragments: Vec<String>,
}

impl Page {
    /// Create a new empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fragments on this page
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the page holds no fragments
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Total visual lines consumed by this page's fragments
    pub fn visual_cost(&self, chars_per_line: usize) -> usize {
        self.fragments
            .iter()
            .map(|f| line_cost(f, chars_per_line))
            .sum()
    }
}
