//! Page range calculation for a bounded-width pager.
//!
//! [`page_range`] decides which page numbers and ellipses are shown for a
//! given page count, and [`Pager`] turns that range into clamped navigation
//! controls. Pages are 1-based everywhere in this module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: u32 = 1;

/// First page, last page, current page and two ellipses.
const FIXED_SLOTS: u32 = 5;

/// One entry of a page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    /// Neither side needs truncation although the page count exceeds the
    /// window. Happens with `sibling_count >= 2` and a current page close to
    /// the middle of a short range.
    #[error(
        "no truncation case covers page {current_page} of {total_pages} with {sibling_count} siblings"
    )]
    UncoveredWindow {
        total_pages: u32,
        current_page: u32,
        sibling_count: u32,
    },
}

/// Computes the visible page markers.
///
/// Returns the full range when `sibling_count + 5 >= total_pages`. Otherwise
/// the range always starts at page 1 and ends at `total_pages`, with the
/// window around `current_page` separated from them by ellipses.
pub fn page_range(
    total_pages: u32,
    current_page: u32,
    sibling_count: u32,
) -> Result<Vec<PageMarker>, PageRangeError> {
    let total_page_numbers = sibling_count + FIXED_SLOTS;

    if total_page_numbers >= total_pages {
        return Ok(contiguous(1, total_pages));
    }

    let left_sibling_index = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling_index = (current_page + sibling_count).min(total_pages);

    let should_show_left_dots = left_sibling_index > 2;
    let should_show_right_dots = right_sibling_index < total_pages.saturating_sub(2);

    let edge_item_count = 3 + 2 * sibling_count;

    match (should_show_left_dots, should_show_right_dots) {
        (false, true) => {
            let left_end = edge_item_count;
            // a block reaching the last page would repeat it after the ellipsis
            if left_end >= total_pages {
                return Ok(contiguous(1, total_pages));
            }
            let mut range = contiguous(1, left_end);
            range.push(PageMarker::Ellipsis);
            range.push(PageMarker::Page(total_pages));
            Ok(range)
        }
        (true, false) => {
            let right_start = (total_pages + 1).saturating_sub(edge_item_count);
            // a block reaching page 1 would repeat it before the ellipsis
            if right_start <= 1 {
                return Ok(contiguous(1, total_pages));
            }
            let mut range = vec![PageMarker::Page(1), PageMarker::Ellipsis];
            range.extend(contiguous(right_start, total_pages));
            Ok(range)
        }
        (true, true) => {
            let mut range = vec![PageMarker::Page(1), PageMarker::Ellipsis];
            range.extend(contiguous(left_sibling_index, right_sibling_index));
            range.push(PageMarker::Ellipsis);
            range.push(PageMarker::Page(total_pages));
            Ok(range)
        }
        (false, false) => Err(PageRangeError::UncoveredWindow {
            total_pages,
            current_page,
            sibling_count,
        }),
    }
}

fn contiguous(start: u32, end: u32) -> Vec<PageMarker> {
    (start..=end).map(PageMarker::Page).collect()
}

/// One rendered control of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerControl {
    Previous { target: u32, disabled: bool },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: u32, disabled: bool },
}

/// Fully controlled pager state: the caller owns `current_page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
    pub markers: Vec<PageMarker>,
}

impl Pager {
    /// Builds the pager, or `None` when there is nothing to page through
    /// (`current_page == 0` or fewer than two markers).
    ///
    /// An uncovered window falls back to the full contiguous range; the error
    /// is handed to `on_uncovered` so the caller can report it.
    pub fn build(
        total_pages: u32,
        current_page: u32,
        sibling_count: u32,
        on_uncovered: impl FnOnce(&PageRangeError),
    ) -> Option<Self> {
        if current_page == 0 {
            return None;
        }

        let markers = match page_range(total_pages, current_page, sibling_count) {
            Ok(markers) => markers,
            Err(err) => {
                on_uncovered(&err);
                contiguous(1, total_pages)
            }
        };

        if markers.len() < 2 {
            return None;
        }

        Some(Self {
            current_page,
            total_pages,
            markers,
        })
    }

    pub fn previous_page(&self) -> u32 {
        self.current_page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        (self.current_page + 1).min(self.total_pages)
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages
    }

    pub fn controls(&self) -> Vec<PagerControl> {
        let mut controls = Vec::with_capacity(self.markers.len() + 2);
        controls.push(PagerControl::Previous {
            target: self.previous_page(),
            disabled: self.is_first(),
        });
        controls.extend(self.markers.iter().map(|marker| match *marker {
            PageMarker::Page(number) => PagerControl::Page {
                number,
                active: number == self.current_page,
            },
            PageMarker::Ellipsis => PagerControl::Ellipsis,
        }));
        controls.push(PagerControl::Next {
            target: self.next_page(),
            disabled: self.is_last(),
        });
        controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    fn pages(range: &[PageMarker]) -> Vec<Option<u32>> {
        range
            .iter()
            .map(|m| match m {
                Page(page) => Some(*page),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_short_ranges_are_contiguous() {
        for sibling in 0..4 {
            for total in 0..=sibling + 5 {
                for current in 1..=total.max(1) {
                    let range = page_range(total, current, sibling).unwrap();
                    let expected: Vec<_> = (1..=total).map(Page).collect();
                    assert_eq!(range, expected, "total={total} current={current}");
                }
            }
        }
    }

    #[test]
    fn test_both_sides_truncated() {
        let range = page_range(20, 10, 1).unwrap();
        assert_eq!(
            range,
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_right_truncation_shows_leading_block() {
        let range = page_range(20, 1, 1).unwrap();
        assert_eq!(
            pages(&range),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
    }

    #[test]
    fn test_left_truncation_shows_trailing_block() {
        let range = page_range(20, 20, 1).unwrap();
        assert_eq!(
            pages(&range),
            vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn test_one_sided_blocks_with_wide_siblings() {
        // 3 + 2 * 2 = 7 pages in the block, then the ellipsis and page 8
        assert_eq!(
            pages(&page_range(8, 1, 2).unwrap()),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7), None, Some(8)]
        );
        assert_eq!(
            pages(&page_range(8, 8, 2).unwrap()),
            vec![Some(1), None, Some(2), Some(3), Some(4), Some(5), Some(6), Some(7), Some(8)]
        );
    }

    #[test]
    fn test_block_touching_the_edge_is_not_repeated() {
        // left-only with a 9-page block over 9 pages would list page 1 twice
        assert_eq!(page_range(9, 9, 3).unwrap(), (1..=9).map(Page).collect::<Vec<_>>());
        // right-only with a 9-page block over 9 pages would list page 9 twice
        assert_eq!(page_range(9, 1, 3).unwrap(), (1..=9).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn test_boundary_between_cases() {
        // left sibling index 2 keeps the leading block
        assert_eq!(page_range(10, 3, 1).unwrap().len(), 7);
        assert_eq!(page_range(10, 3, 1).unwrap()[5], Ellipsis);
        // left sibling index 3 switches to both ellipses
        assert_eq!(
            page_range(10, 4, 1).unwrap(),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        // right sibling index 8 == total - 2 drops the right ellipsis
        assert_eq!(
            page_range(10, 7, 1).unwrap(),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_current_page_always_visible() {
        for total in 7..40 {
            for current in 1..=total {
                let range = page_range(total, current, 1).unwrap();
                assert!(range.contains(&Page(current)), "total={total} current={current}");
                assert_eq!(range.first(), Some(&Page(1)));
                assert_eq!(range.last(), Some(&Page(total)));
            }
        }
    }

    #[test]
    fn test_uncovered_window_is_reported() {
        let err = page_range(8, 4, 2).unwrap_err();
        assert_eq!(
            err,
            PageRangeError::UncoveredWindow {
                total_pages: 8,
                current_page: 4,
                sibling_count: 2
            }
        );
    }

    #[test]
    fn test_oversized_sibling_count_never_underflows() {
        let range = page_range(10, 9, 4).unwrap();
        assert_eq!(range, (1..=10).map(Page).collect::<Vec<_>>());
        let range = page_range(10, 1, 4).unwrap();
        assert_eq!(range, (1..=10).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn test_pager_suppressed_without_pages() {
        assert!(Pager::build(20, 0, 1, |_| {}).is_none());
        assert!(Pager::build(1, 1, 1, |_| {}).is_none());
        assert!(Pager::build(0, 1, 1, |_| {}).is_none());
        assert!(Pager::build(2, 1, 1, |_| {}).is_some());
    }

    #[test]
    fn test_pager_navigation_is_clamped() {
        let first = Pager::build(5, 1, 1, |_| {}).unwrap();
        assert_eq!(first.previous_page(), 1);
        assert!(first.is_first());

        let last = Pager::build(5, 5, 1, |_| {}).unwrap();
        assert_eq!(last.next_page(), 5);
        assert!(last.is_last());

        let middle = Pager::build(5, 3, 1, |_| {}).unwrap();
        assert_eq!(middle.previous_page(), 2);
        assert_eq!(middle.next_page(), 4);
    }

    #[test]
    fn test_pager_controls() {
        let pager = Pager::build(20, 10, 1, |_| {}).unwrap();
        let controls = pager.controls();
        assert_eq!(controls.len(), 9);
        assert_eq!(
            controls[0],
            PagerControl::Previous {
                target: 9,
                disabled: false
            }
        );
        assert_eq!(controls[2], PagerControl::Ellipsis);
        assert_eq!(
            controls[4],
            PagerControl::Page {
                number: 10,
                active: true
            }
        );
        assert_eq!(
            controls[8],
            PagerControl::Next {
                target: 11,
                disabled: false
            }
        );
    }

    #[test]
    fn test_pager_falls_back_on_uncovered_window() {
        let mut reported = None;
        let pager = Pager::build(8, 4, 2, |err| reported = Some(err.clone())).unwrap();
        assert_eq!(pager.markers, (1..=8).map(Page).collect::<Vec<_>>());
        assert!(matches!(
            reported,
            Some(PageRangeError::UncoveredWindow { .. })
        ));
    }
}
