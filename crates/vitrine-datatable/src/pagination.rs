//! Read-only pagination descriptor.
//!
//! The engine never computes pages from the record slice it renders; the
//! caller (usually a server) already paginated, and this struct just carries
//! what the footer displays. Page-change clicks come back as intents.

use serde::{Deserialize, Serialize};

/// Display data for the pagination footer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items across all pages.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

impl PageInfo {
    /// Create a descriptor, deriving `total_pages` from the totals.
    ///
    /// A non-positive `per_page` is clamped to 1; the descriptor is
    /// caller-supplied display data and must never panic.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// First displayed item number (1-indexed), 0 when there are no items.
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// Last displayed item number.
    pub fn end_item(&self) -> i64 {
        (self.page * self.per_page).min(self.total)
    }

    /// Whether on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Whether on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Page numbers to offer as direct links, windowed around the current
    /// page when there are more than `max_visible` pages.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, 20, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(PageInfo::new(1, 10, 45).total_pages, 5);
        assert_eq!(PageInfo::new(1, 10, 50).total_pages, 5);
        assert_eq!(PageInfo::new(1, 10, 0).total_pages, 1);
    }

    #[test]
    fn test_non_positive_per_page_clamped() {
        let info = PageInfo::new(1, 0, 45);
        assert_eq!(info.per_page, 1);
        assert_eq!(info.total_pages, 45);
        let info = PageInfo::new(1, -5, 45);
        assert_eq!(info.per_page, 1);
    }

    #[test]
    fn test_display_range_first_page() {
        let info = PageInfo::new(1, 10, 45);
        assert_eq!(info.start_item(), 1);
        assert_eq!(info.end_item(), 10);
        assert!(info.is_first());
    }

    #[test]
    fn test_display_range_last_page() {
        let info = PageInfo::new(5, 10, 45);
        assert_eq!(info.start_item(), 41);
        assert_eq!(info.end_item(), 45);
        assert!(info.is_last());
    }

    #[test]
    fn test_display_range_empty() {
        let info = PageInfo::new(1, 10, 0);
        assert_eq!(info.start_item(), 0);
        assert_eq!(info.end_item(), 0);
    }

    #[test]
    fn test_page_numbers_window() {
        let info = PageInfo::new(7, 10, 200);
        assert_eq!(info.page_numbers(5), vec![5, 6, 7, 8, 9]);
        let small = PageInfo::new(1, 10, 30);
        assert_eq!(small.page_numbers(5), vec![1, 2, 3]);
    }
}
