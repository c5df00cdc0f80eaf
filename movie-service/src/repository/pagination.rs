//! Page-based pagination
//!
//! Pages are 1-indexed. A request for page `p` with `limit` items per page
//! skips `(p - 1) * limit` records.
//!
//! ```rust
//! use movie_service::repository::PageRequest;
//!
//! let request = PageRequest::new(3, 20);
//! assert_eq!(request.offset(), 40);
//! assert_eq!(request.limit, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Page used when none is requested
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when none is requested
pub const DEFAULT_LIMIT: u64 = 10;

/// A request for one page of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: u64,
    /// Maximum number of records on the page
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request; zero values fall back to the defaults
    #[must_use]
    pub const fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Number of records to skip
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// One page of records plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page, in store order
    pub items: Vec<T>,
    /// Number of records in the whole collection
    pub total: u64,
    /// The page that was requested
    pub page: u64,
    /// The page size that was requested
    pub limit: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its items and the collection total
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Total number of pages for the collection (0 when empty)
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 10);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(5, 3).offset(), 12);
    }

    #[test]
    fn test_zero_falls_back_to_defaults() {
        assert_eq!(PageRequest::new(0, 0), PageRequest::default());
    }

    #[test]
    fn test_offset_saturates() {
        let request = PageRequest::new(u64::MAX, u64::MAX);
        assert_eq!(request.offset(), u64::MAX);
    }

    #[test]
    fn test_page_echoes_request() {
        let page = Page::new(vec!["a", "b"], 25, PageRequest::new(2, 10));
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_page_serializes_flat() {
        let page = Page::new(vec![1, 2], 2, PageRequest::default());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "items": [1, 2], "total": 2, "page": 1, "limit": 10 })
        );
    }
}
