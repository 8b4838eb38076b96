//! Page-number pagination for listings.

use serde::Serialize;

use crate::search::clamp_limit;

/// Rows per page when the caller does not ask for a size.
pub const DEFAULT_PER_PAGE: i64 = 6;

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: i64 = 100;

/// A resolved page request: 1-based page number plus clamped size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Resolve raw query parameters. Pages below 1 become page 1.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: clamp_limit(per_page, DEFAULT_PER_PAGE, MAX_PER_PAGE),
        }
    }

    /// SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination metadata returned alongside a page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageInfo {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            total_pages: total_pages(total, request.per_page),
        }
    }
}

/// Number of pages needed to show `total` rows, `per_page` at a time.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, DEFAULT_PER_PAGE);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn offset_follows_page_number() {
        let req = PageRequest::new(Some(3), Some(10));
        assert_eq!(req.limit(), 10);
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn page_below_one_is_first_page() {
        assert_eq!(PageRequest::new(Some(0), None).page, 1);
        assert_eq!(PageRequest::new(Some(-4), None).page, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn page_info_reports_totals() {
        let info = PageInfo::new(PageRequest::new(Some(2), Some(5)), 11);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.page, 2);
    }
}
