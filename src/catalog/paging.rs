//! Page-index arithmetic shared by the catalog client and the view state.
//!
//! Page indices are 1-based. The total page count is derived from the
//! catalog-wide item count by integer division, so a trailing partial page is
//! not reachable from the pagination strip.

/// Number of products requested per page
pub const PAGE_SIZE: u64 = 10;

/// Offset into the catalog for a 1-based page index
pub fn offset_for_page(page: u64) -> u64 {
    page.saturating_sub(1) * PAGE_SIZE
}

/// Total page count for a catalog-wide item count
pub fn total_pages(total: u64) -> u64 {
    total / PAGE_SIZE
}

/// Whether `target` is a selectable page given the current page count
pub fn in_range(target: u64, total_pages: u64) -> bool {
    target >= 1 && target <= total_pages
}

/// Query parameters for fetching a page of products
pub fn page_query(page: u64) -> [(&'static str, String); 2] {
    [
        ("limit", PAGE_SIZE.to_string()),
        ("skip", offset_for_page(page).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_for_page() {
        assert_eq!(offset_for_page(1), 0);
        assert_eq!(offset_for_page(2), 10);
        assert_eq!(offset_for_page(11), 100);
    }

    #[test]
    fn test_total_pages_floors_partial_pages() {
        assert_eq!(total_pages(105), 10);
        assert_eq!(total_pages(100), 10);
        assert_eq!(total_pages(99), 9);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(9), 0);
        assert_eq!(total_pages(0), 0);
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(1, 3));
        assert!(in_range(3, 3));
        assert!(!in_range(0, 3));
        assert!(!in_range(4, 3));

        // Nothing is selectable before the first page has resolved
        assert!(!in_range(1, 0));
    }

    #[test]
    fn test_page_query() {
        let params = page_query(1);
        assert_eq!(params[0], ("limit", "10".to_string()));
        assert_eq!(params[1], ("skip", "0".to_string()));

        let params = page_query(4);
        assert_eq!(params[1], ("skip", "30".to_string()));
    }
}
