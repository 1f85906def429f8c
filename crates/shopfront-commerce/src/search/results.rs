//! Search results and pagination.

use crate::search::Facet;
use serde::Serialize;

/// Pagination info for one page of a listing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed), after clamping.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages; at least 1.
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Build pagination for `total` items, clamping `page` into
    /// `1..=total_pages`. An empty listing has one empty page.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Page numbers for a pager control (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Start item number (1-indexed), 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// End item number (inclusive).
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }
}

/// One page of a product listing.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    /// Sidebar facets, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<Facet>,
}

impl<T> SearchResults<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination,
            facets: Vec::new(),
        }
    }

    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total matches across all pages.
    pub fn total(&self) -> usize {
        self.pagination.total
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResults<U> {
        SearchResults {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
            facets: self.facets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 12, 30);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 12);
    }

    #[test]
    fn test_pagination_empty_has_one_page() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.page, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_exact_multiple() {
        assert_eq!(Pagination::new(1, 12, 24).total_pages, 2);
        assert_eq!(Pagination::new(1, 12, 25).total_pages, 3);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let p = Pagination::new(9, 12, 18);
        assert_eq!(p.page, 2);
        assert!(p.is_last());

        let p = Pagination::new(0, 12, 18);
        assert_eq!(p.page, 1);
        assert!(p.is_first());
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(1, 10, 100);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3, 4, 5]);

        let p = Pagination::new(10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 12, 18);
        assert_eq!(p.start_item(), 13);
        assert_eq!(p.end_item(), 18);
    }

    #[test]
    fn test_search_results_map() {
        let results = SearchResults::new(vec![1, 2, 3], Pagination::new(1, 12, 3));
        let doubled = results.map(|n| n * 2);
        assert_eq!(doubled.items, vec![2, 4, 6]);
        assert_eq!(doubled.len(), 3);
        assert_eq!(doubled.total(), 3);
    }
}
