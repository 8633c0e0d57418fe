//! Line cost model

use unicode_segmentation::UnicodeSegmentation;

/// Monospace-equivalent width of a line, counted in grapheme clusters.
pub fn width(line: &str) -> usize {
    line.graphemes(true).count()
}

/// Visual display lines a logical line occupies when word-wrapped at
/// `chars_per_line`. An empty line still consumes one visual row.
pub fn line_cost(line: &str, chars_per_line: usize) -> usize {
    width(line).div_ceil(chars_per_line).max(1)
}
