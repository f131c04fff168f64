//! Pager math: the sliding window of page buttons and the edge controls.

use std::ops::RangeInclusive;

/// Page buttons to show: `width` pages centred on `current`, shifted to stay
/// inside `[0, total_pages - 1]`. `None` when there are no pages.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Option<RangeInclusive<usize>> {
    if total_pages == 0 || width == 0 {
        return None;
    }
    let last = total_pages - 1;
    let current = current.min(last);
    let mut start = current.saturating_sub(width / 2);
    let end = (start + width - 1).min(last);
    if end - start + 1 < width {
        start = (end + 1).saturating_sub(width);
    }
    Some(start..=end)
}

/// Enabled state of first/prev/next/last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerEdges {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl PagerEdges {
    pub fn new(current: usize, total_pages: usize) -> Self {
        Self {
            can_go_back: current > 0,
            can_go_forward: current + 1 < total_pages,
        }
    }
}

/// Clamp a page index into range. Zero pages clamp to 0.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// "Go to page" box: 1-based input, clamped to `[1, total_pages]`,
/// returned as a zero-based index.
pub fn jump_target(input: i64, total_pages: usize) -> usize {
    let max = total_pages.max(1) as i64;
    (input.clamp(1, max) - 1) as usize
}

/// 1-based row number shown in the first column
pub fn row_number(page: usize, page_size: usize, index: usize) -> usize {
    page * page_size + index + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        assert_eq!(page_window(0, 1, 5), Some(0..=0));
        let edges = PagerEdges::new(0, 1);
        assert!(!edges.can_go_back);
        assert!(!edges.can_go_forward);
    }

    #[test]
    fn test_window_centres_on_current() {
        assert_eq!(page_window(5, 20, 5), Some(3..=7));
    }

    #[test]
    fn test_window_shifts_at_edges() {
        assert_eq!(page_window(0, 20, 5), Some(0..=4));
        assert_eq!(page_window(1, 20, 5), Some(0..=4));
        assert_eq!(page_window(19, 20, 5), Some(15..=19));
        assert_eq!(page_window(18, 20, 5), Some(15..=19));
    }

    #[test]
    fn test_window_narrower_than_width() {
        assert_eq!(page_window(2, 3, 5), Some(0..=2));
        assert_eq!(page_window(0, 0, 5), None);
        assert_eq!(page_window(7, 3, 5), Some(0..=2));
    }

    #[test]
    fn test_last_page_disables_forward() {
        let edges = PagerEdges::new(9, 10);
        assert!(edges.can_go_back);
        assert!(!edges.can_go_forward);
    }

    #[test]
    fn test_jump_target_clamps() {
        assert_eq!(jump_target(0, 10), 0);
        assert_eq!(jump_target(-3, 10), 0);
        assert_eq!(jump_target(4, 10), 3);
        assert_eq!(jump_target(99, 10), 9);
        assert_eq!(jump_target(5, 0), 0);
    }

    #[test]
    fn test_clamp_and_row_number() {
        assert_eq!(clamp_page(7, 3), 2);
        assert_eq!(clamp_page(7, 0), 0);
        assert_eq!(row_number(2, 8, 0), 17);
    }
}
