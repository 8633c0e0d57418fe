//! Layout parameters and cached layout state

use crate::document::Document;
use crate::layout::packer::PagePacker;
use crate::layout::pagination::Page;

/// Default characters that fit one visual line at the letterhead page width
pub const CHARS_PER_LINE: usize = 75;

/// Default visual lines per page after reserving header and footer space
pub const MAX_LINES_PER_PAGE: usize = 27;

/// Layout parameters for the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub chars_per_line: usize,
    pub max_lines_per_page: usize,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            chars_per_line: CHARS_PER_LINE,
            max_lines_per_page: MAX_LINES_PER_PAGE,
        }
    }
}

impl LayoutParams {
    /// Create layout parameters; both dimensions are clamped to at least 1
    pub fn new(chars_per_line: usize, max_lines_per_page: usize) -> Self {
        Self {
            chars_per_line: chars_per_line.max(1),
            max_lines_per_page: max_lines_per_page.max(1),
        }
    }

    /// Characters that fit one full empty page
    pub fn page_char_budget(&self) -> usize {
        self.chars_per_line * self.max_lines_per_page
    }
}

/// Cached layout state.
///
/// Pages are a pure function of `(Document, LayoutParams)`, so the state
/// keeps the last result keyed by the document's content hash and only
/// repacks when the snapshot actually changed.
pub struct LayoutState {
    params: LayoutParams,
    pages: Vec<Page>,
    content_hash: Option<u64>,
}

impl LayoutState {
    /// Create new layout state
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            pages: Vec::new(),
            content_hash: None,
        }
    }

    /// Get parameters
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Recompute pages for the given document snapshot.
    ///
    /// Returns `true` when a repack actually ran, `false` when the cached
    /// layout was still valid.
    pub fn relayout(&mut self, document: &Document) -> bool {
        if self.content_hash == Some(document.content_hash()) {
            return false;
        }

        self.pages = PagePacker::new(self.params).pack(document.lines());
        self.content_hash = Some(document.content_hash());
        true
    }

    /// Get pages from the last relayout
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get page count
    pub fn page_count(&self) -> usize {
        self.pages.len().max(1)
    }
}
