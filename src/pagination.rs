//! Pagination math shared by the listing endpoint and the browse controller.

use serde::{Deserialize, Serialize};

/// Number of advocates per page. Fixed server-side, not client-controlled.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How many page numbers the window shows before gaps appear.
const MAX_VISIBLE_PAGES: usize = 5;

/// Derived description of a position within a paged result set.
///
/// Computed fresh for every listing response, never stored. `total` is the
/// number of records matching the active filter, not the size of the
/// returned page, so metadata stays correct for out-of-range pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMetadata {
    /// Derives the metadata for `page` over `total` records. Pages below 1
    /// are clamped to 1.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page = page.max(1);
        let total_pages = total.div_ceil(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    /// Page numbers the UI should offer, with `None` marking a gap.
    pub fn visible_pages(&self) -> Vec<Option<usize>> {
        page_window(self.page, self.total_pages)
    }
}

/// Computes the visible page-number window for pagination controls.
///
/// Up to [`MAX_VISIBLE_PAGES`] total pages every page is listed. Beyond that
/// the window keeps the first and last page plus the neighbours of the
/// current page, inserting `None` where pages are elided.
pub fn page_window(page: usize, total_pages: usize) -> Vec<Option<usize>> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Some).collect();
    }

    let start = page.saturating_sub(1).max(2);
    let end = (page + 1).min(total_pages - 1);

    let mut pages = vec![Some(1)];
    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=end).map(Some));
    if end < total_pages - 1 {
        pages.push(None);
    }
    pages.push(Some(total_pages));

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_totals_and_boundary_flags() {
        let meta = PaginationMetadata::new(1, 10, 95);
        assert_eq!(meta.total_pages, 10);
        assert!(meta.has_next_page);
        assert!(!meta.has_previous_page);

        let last = PaginationMetadata::new(10, 10, 95);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);
    }

    #[test]
    fn total_pages_is_ceiling_of_total_over_page_size() {
        for total in 0..200 {
            let meta = PaginationMetadata::new(1, 10, total);
            assert_eq!(meta.total_pages, total.div_ceil(10));
            assert_eq!(meta.total_pages == 0, total == 0);
        }
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let meta = PaginationMetadata::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
        assert!(meta.visible_pages().is_empty());
    }

    #[test]
    fn page_below_one_is_clamped() {
        let meta = PaginationMetadata::new(0, 10, 30);
        assert_eq!(meta.page, 1);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn out_of_range_page_keeps_metadata_from_total() {
        let meta = PaginationMetadata::new(7, 10, 25);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_window(1, 3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            page_window(4, 5),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn window_elides_around_the_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn window_at_the_edges_elides_once() {
        assert_eq!(
            page_window(1, 10),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn window_is_stable_for_identical_inputs() {
        assert_eq!(page_window(5, 10), page_window(5, 10));
    }

    #[test]
    fn metadata_serializes_camel_case() {
        let meta = PaginationMetadata::new(2, 10, 25);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPreviousPage"], true);
    }
}
