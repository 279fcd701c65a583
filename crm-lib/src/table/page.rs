//! Pagination math and the pagination control model.

use std::ops::Range;

/// Default number of rows per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of pages for `count` rows, never less than one.
///
/// `items_per_page` of zero is treated as one.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1)).max(1)
}

/// Index range of a 1-based page within `count` rows.
///
/// Pages past the end yield an empty range at `count`.
pub fn page_range(page: usize, items_per_page: usize, count: usize) -> Range<usize> {
    let per_page = items_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(count);
    let end = start.saturating_add(per_page).min(count);
    start..end
}

/// Pagination controls shown under a table with more than one page.
///
/// Every page gets a numbered button; there is no truncation.
///
/// # Example
///
/// ```
/// use crm_lib::table::Pagination;
///
/// let pagination = Pagination::new(3, 10, 25).unwrap();
/// assert_eq!(pagination.total_pages(), 3);
/// assert!(!pagination.next_enabled());
/// assert_eq!(pagination.summary(), "Showing 21 to 25 of 25 results");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    items_per_page: usize,
    total_count: usize,
}

impl Pagination {
    /// Builds the controls, or `None` when everything fits on one page.
    ///
    /// `current_page` is clamped into range.
    pub fn new(current_page: usize, items_per_page: usize, total_count: usize) -> Option<Self> {
        let total = total_pages(total_count, items_per_page);
        if total <= 1 {
            return None;
        }
        Some(Self {
            current_page: current_page.clamp(1, total),
            total_pages: total,
            items_per_page: items_per_page.max(1),
            total_count,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the total number of filtered rows.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Page numbers for the numbered buttons, `1..=total_pages`.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    /// Previous is disabled on the first page.
    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    /// Next is disabled on the last page.
    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based position of the first row on the page.
    pub fn first_shown(&self) -> usize {
        page_range(self.current_page, self.items_per_page, self.total_count).start + 1
    }

    /// 1-based position of the last row on the page.
    pub fn last_shown(&self) -> usize {
        page_range(self.current_page, self.items_per_page, self.total_count).end
    }

    /// "Showing X to Y of Z results".
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first_shown(),
            self.last_shown(),
            self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 10, 25), 0..10);
        assert_eq!(page_range(3, 10, 25), 20..25);
        assert_eq!(page_range(4, 10, 25), 25..25);
        assert_eq!(page_range(0, 10, 25), 0..10);
    }

    #[test]
    fn test_single_page_has_no_controls() {
        assert!(Pagination::new(1, 10, 0).is_none());
        assert!(Pagination::new(1, 10, 10).is_none());
    }

    #[test]
    fn test_prev_next() {
        let first = Pagination::new(1, 10, 25).unwrap();
        assert!(!first.prev_enabled());
        assert!(first.next_enabled());
        assert_eq!(first.page_numbers(), vec![1, 2, 3]);

        let middle = Pagination::new(2, 10, 25).unwrap();
        assert!(middle.prev_enabled());
        assert!(middle.next_enabled());
        assert_eq!(middle.summary(), "Showing 11 to 20 of 25 results");
    }
}
