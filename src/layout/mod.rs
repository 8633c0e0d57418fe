//! Layout engine: line costs, page packing, cached state

mod cost;
mod engine;
mod packer;
mod pagination;

pub use cost::{line_cost, width};
pub use engine::{LayoutParams, LayoutState, CHARS_PER_LINE, MAX_LINES_PER_PAGE};
pub use packer::{PagePacker, WORD_BREAK_THRESHOLD};
pub use pagination::Page;
