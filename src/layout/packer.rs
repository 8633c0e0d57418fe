//! Greedy page packing with word-boundary-aware splits

use crate::layout::cost::{line_cost, width};
use crate::layout::engine::LayoutParams;
use crate::layout::pagination::Page;
use unicode_segmentation::UnicodeSegmentation;

/// Fraction of a split budget a word boundary must reach to be used.
///
/// Caps the trailing room wasted by a split at 30% of the budget; an
/// earlier space forces a hard cut at the numeric budget instead. The
/// exact value is a heuristic, not load-bearing.
pub const WORD_BREAK_THRESHOLD: f32 = 0.7;

/// Greedy page packer.
///
/// Consumes logical lines in source order and partitions them into pages
/// of at most `max_lines_per_page` visual lines each.
#[derive(Debug, Clone, Copy)]
pub struct PagePacker {
    params: LayoutParams,
}

impl PagePacker {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    /// Partition logical lines into pages.
    ///
    /// A line that fits the room left on the current page is placed whole.
    /// One that does not fit is split at the character budget of the
    /// remaining room, preferring a word boundary near the budget, and the
    /// remainder flows onto fresh pages, slicing off one full page at a
    /// time while it is still too large. Always yields at least one page.
    pub fn pack<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Page> {
        let max_lines = self.params.max_lines_per_page;
        let chars_per_line = self.params.chars_per_line;

        let mut pages: Vec<Page> = Vec::new();
        let mut page = Page::new();
        let mut used = 0usize;

        for line in lines {
            let line = line.as_ref();
            let cost = line_cost(line, chars_per_line);

            if used + cost <= max_lines {
                page.fragments.push(line.to_owned());
                used += cost;
                continue;
            }

            let remaining_lines = max_lines - used;
            let mut rest: &str = line;

            // Partial room left and the line spans more than one visual
            // line: keep a head slice on this page before closing it.
            if remaining_lines > 0 && width(line) > chars_per_line {
                let (head, tail) = split_at_budget(line, remaining_lines * chars_per_line);
                page.fragments.push(head.to_owned());
                rest = tail;
            }

            pages.push(std::mem::take(&mut page));
            used = 0;

            loop {
                let rest_cost = line_cost(rest, chars_per_line);
                if rest_cost <= max_lines {
                    page.fragments.push(rest.to_owned());
                    used = rest_cost;
                    break;
                }

                let (head, tail) = split_at_budget(rest, self.params.page_char_budget());
                page.fragments.push(head.to_owned());
                pages.push(std::mem::take(&mut page));
                rest = tail;
            }
        }

        // An empty document still yields exactly one (empty) page.
        if !page.fragments.is_empty() || pages.is_empty() {
            pages.push(page);
        }

        pages
    }
}

/// Cut `line` so the head holds at most `budget` grapheme clusters.
///
/// The last space at or before the budget wins when its position reaches
/// [`WORD_BREAK_THRESHOLD`] of the budget; the splitting space is consumed.
/// Otherwise the cut lands exactly at the budget. Callers guarantee the
/// line is wider than the budget, so the tail covers the remainder.
fn split_at_budget(line: &str, budget: usize) -> (&str, &str) {
    debug_assert!(width(line) > budget);

    let mut budget_byte = line.len();
    let mut space: Option<(usize, usize)> = None;

    for (cluster_idx, (byte_idx, grapheme)) in line.grapheme_indices(true).enumerate() {
        if cluster_idx == budget {
            budget_byte = byte_idx;
        }
        if grapheme == " " {
            space = Some((cluster_idx, byte_idx));
        }
        if cluster_idx >= budget {
            break;
        }
    }

    if let Some((space_idx, space_byte)) = space {
        if space_idx as f32 >= WORD_BREAK_THRESHOLD * budget as f32 {
            return (&line[..space_byte], &line[space_byte + 1..]);
        }
    }

    (&line[..budget_byte], &line[budget_byte..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packer(chars_per_line: usize, max_lines_per_page: usize) -> PagePacker {
        PagePacker::new(LayoutParams::new(chars_per_line, max_lines_per_page))
    }

    /// A single line of `n` four-letter words separated by spaces.
    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_input_yields_one_empty_page() {
        let pages = packer(75, 27).pack::<String>(&[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_short_document_fits_one_page() {
        let pages = packer(75, 27).pack(&["Hello", "World"]);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].fragments, vec!["Hello", "World"]);
    }

    #[test]
    fn test_exact_fit_boundary() {
        let lines: Vec<String> = (0..27).map(|i| format!("paragraph {i}")).collect();
        let pages = packer(75, 27).pack(&lines);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].fragment_count(), 27);

        let mut lines = lines;
        lines.push("one more".to_owned());
        let pages = packer(75, 27).pack(&lines);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].fragments, vec!["one more"]);
    }

    #[test]
    fn test_split_prefers_word_boundary() {
        // Budget 10: spaces land at clusters 4 and 9; 9 clears the 70% mark.
        let pages = packer(10, 1).pack(&["aaaa bbbb cccc"]);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].fragments, vec!["aaaa bbbb"]);
        assert_eq!(pages[1].fragments, vec!["cccc"]);
    }

    #[test]
    fn test_split_hard_cuts_when_space_is_too_early() {
        // Only space is at cluster 3, short of 70% of the 10-cluster budget.
        let pages = packer(10, 1).pack(&["aaa bbbbbbbbbbbb"]);
        assert_eq!(pages[0].fragments, vec!["aaa bbbbbb"]);
        assert_eq!(pages[1].fragments, vec!["bbbbbb"]);
    }

    #[test]
    fn test_partial_page_split_flows_remainder() {
        let pages = packer(10, 3).pack(&["hello", "aaaaaaaaa bbbbbbbbb ccccc"]);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].fragments, vec!["hello", "aaaaaaaaa bbbbbbbbb"]);
        assert_eq!(pages[1].fragments, vec!["ccccc"]);
    }

    #[test]
    fn test_full_page_forces_whole_line_onto_next() {
        // No room left at all: the line moves to a fresh page unsplit.
        let pages = packer(10, 1).pack(&["first line", "second"]);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].fragments, vec!["second"]);
    }

    #[test]
    fn test_oversized_line_fills_whole_pages() {
        // 30 words = 149 clusters; each page holds 74 of them (15 words)
        // after the splitting space is consumed.
        let line = words(30);
        let pages = packer(75, 1).pack(&[line.as_str()]);
        assert_eq!(pages.len(), 2);
        for page in &pages {
            assert_eq!(page.fragment_count(), 1);
            assert!(width(&page.fragments[0]) <= 75);
            assert!(!page.fragments[0].ends_with(' '));
        }
        let rejoined = pages
            .iter()
            .map(|p| p.fragments[0].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, line);
    }

    #[test]
    fn test_many_page_overflow_terminates_in_order() {
        let line = words(60); // 299 clusters at 75 per page
        let pages = packer(75, 1).pack(&[line.as_str()]);
        assert_eq!(pages.len(), 4);
        let rejoined = pages
            .iter()
            .flat_map(|p| p.fragments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, line);
    }

    #[test]
    fn test_capacity_invariant_on_mixed_document() {
        let lines = vec![
            words(40),
            String::new(),
            "## Section".to_owned(),
            words(3),
            words(25),
            String::new(),
            words(12),
        ];
        let params = LayoutParams::new(20, 5);
        let pages = PagePacker::new(params).pack(&lines);
        for page in &pages {
            assert!(page.visual_cost(params.chars_per_line) <= params.max_lines_per_page);
        }
    }

    #[test]
    fn test_fragments_keep_source_order() {
        let lines: Vec<String> = (0..40).map(|i| format!("line number {i}")).collect();
        let pages = packer(75, 7).pack(&lines);
        let flattened: Vec<&String> = pages.iter().flat_map(|p| p.fragments.iter()).collect();
        assert_eq!(flattened.len(), 40);
        for (i, fragment) in flattened.iter().enumerate() {
            assert_eq!(**fragment, format!("line number {i}"));
        }
    }

    #[test]
    fn test_round_trip_with_word_boundary_splits() {
        let lines = vec![words(10), "short".to_owned(), words(22)];
        let params = LayoutParams::new(15, 3);
        let pages = PagePacker::new(params).pack(&lines);

        // Rejoin every fragment in order, inserting a space at split
        // junctions, and compare against the source line sequence.
        let mut rebuilt: Vec<String> = Vec::new();
        let flattened: Vec<&String> = pages.iter().flat_map(|p| p.fragments.iter()).collect();
        let mut idx = 0;
        for line in &lines {
            let mut acc = String::new();
            loop {
                if !acc.is_empty() {
                    acc.push(' ');
                }
                acc.push_str(flattened[idx]);
                idx += 1;
                if acc == *line {
                    break;
                }
            }
            rebuilt.push(acc);
        }
        assert_eq!(idx, flattened.len());
        assert_eq!(rebuilt, lines);
    }

    #[test]
    fn test_split_is_safe_on_multibyte_text() {
        // Two-byte clusters with no spaces force hard cuts on cluster
        // boundaries, never mid-codepoint.
        let line = "ä".repeat(23);
        let pages = packer(5, 2).pack(&[line.as_str()]);
        let rejoined: String = pages
            .iter()
            .flat_map(|p| p.fragments.iter().map(String::as_str))
            .collect();
        assert_eq!(rejoined, line);
        for page in &pages[..pages.len() - 1] {
            assert_eq!(width(&page.fragments[0]), 10);
        }
    }

    #[test]
    fn test_blank_lines_consume_one_visual_line() {
        let lines = vec!["a", "", "b", "", "c"];
        let pages = packer(75, 2).pack(&lines);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].fragments, vec!["a", ""]);
        assert_eq!(pages[1].fragments, vec!["b", ""]);
        assert_eq!(pages[2].fragments, vec!["c"]);
    }
}
