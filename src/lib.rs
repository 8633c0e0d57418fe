//! Letterhead-Layout: a paginated document layout engine
//!
//! This crate turns raw letter text into print-ready pages:
//! - Grapheme-aware line cost model (visual lines at a fixed character width)
//! - Greedy page packing with word-boundary-aware splits across pages
//! - Block-level classification of fragments for the preview renderer

pub mod document;
pub mod layout;
pub mod render;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::LetterheadPreview;

// Re-export primary types
pub use document::Document;
pub use layout::{
    LayoutParams, LayoutState, Page, PagePacker, CHARS_PER_LINE, MAX_LINES_PER_PAGE,
    WORD_BREAK_THRESHOLD,
};
pub use render::{classify, render_page, BlockInstruction, InlineSpan, InlineSpans};

/// Lay out raw text into pages.
///
/// Pure and total: any finite input yields at least one page, and larger
/// input only yields more pages.
pub fn layout(document: &str, params: LayoutParams) -> Vec<Page> {
    PagePacker::new(params).pack(Document::from_text(document).lines())
}

/// The preview engine combining the document snapshot and cached layout.
///
/// The live editing view treats the text as a single unpaginated flow;
/// this type backs the print preview, which repaginates only when the
/// text actually changed.
pub struct PreviewEngine {
    document: Document,
    layout: LayoutState,
    layout_dirty: bool,
}

impl PreviewEngine {
    /// Create a new engine with the given parameters
    pub fn new(params: LayoutParams) -> Self {
        Self {
            document: Document::new(),
            layout: LayoutState::new(params),
            layout_dirty: true,
        }
    }

    /// Create an engine with initial text content
    pub fn with_text(text: &str, params: LayoutParams) -> Self {
        let mut engine = Self::new(params);
        engine.document = Document::from_text(text);
        engine.layout_dirty = true;
        engine
    }

    /// Replace the document snapshot
    pub fn set_text(&mut self, text: &str) {
        self.document = Document::from_text(text);
        self.layout_dirty = true;
    }

    /// Repaginate if needed; returns whether a repack actually ran
    pub fn update_layout(&mut self) -> bool {
        if !self.layout_dirty {
            return false;
        }

        let changed = self.layout.relayout(&self.document);
        self.layout_dirty = false;
        changed
    }

    /// Get pages from the last layout pass
    pub fn pages(&self) -> &[Page] {
        self.layout.pages()
    }

    /// Get total page count
    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    /// Get document text
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Get layout parameters
    pub fn params(&self) -> &LayoutParams {
        self.layout.params()
    }
}
