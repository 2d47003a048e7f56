//! Pagination metadata for listing footers.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` and `per_page` are clamped to at least 1.
    pub fn new(page: u32, per_page: u32, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page as usize) as u32
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.per_page as usize
    }

    /// Whether this page lies past the last one.
    pub fn is_out_of_range(&self) -> bool {
        self.page > self.total_pages
    }

    /// Get start item number (1-indexed), 0 when the page is empty.
    pub fn start_item(&self) -> usize {
        if self.total == 0 || self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page as usize * self.per_page as usize).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 3, 5);
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 3);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);
    }

    #[test]
    fn test_pagination_empty_total() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_out_of_range() {
        let p = Pagination::new(4, 10, 25);
        assert!(p.is_out_of_range());
        assert_eq!(p.start_item(), 0);
    }

    #[test]
    fn test_pagination_clamps_zero() {
        let p = Pagination::new(0, 0, 3);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn test_pagination_camel_case_keys() {
        let json = serde_json::to_value(Pagination::new(2, 3, 7)).unwrap();
        assert_eq!(json["perPage"], 3);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNext"], true);
        assert_eq!(json["hasPrev"], true);

        let back: Pagination = serde_json::from_value(json).unwrap();
        assert_eq!(back, Pagination::new(2, 3, 7));
    }
}
