//! Shared query parameter types for API handlers.

use carteira_core::pagination::PageRequest;
use carteira_db::models::listing::ListFilter;
use serde::Deserialize;

/// Free-text search plus page-number pagination
/// (`?query=&page=&per_page=`).
///
/// Used by every listing without entity-specific filters. Page size is
/// clamped by [`PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub query: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListParams {
    pub fn filter(&self) -> ListFilter {
        ListFilter::new(
            self.query.as_deref(),
            PageRequest::new(self.page, self.per_page),
        )
    }
}
