//! Render output: block-level instructions for the preview UI

mod display;

pub use display::{classify, render_page, BlockInstruction, InlineSpan, InlineSpans};
