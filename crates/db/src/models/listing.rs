//! Shared listing filter.

use carteira_core::pagination::PageRequest;
use carteira_core::search::like_pattern;

/// A free-text filter plus a page window, ready to bind into a listing query.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// `ILIKE` pattern, or `None` for no text filter.
    pub pattern: Option<String>,
    pub page: PageRequest,
}

impl ListFilter {
    pub fn new(query: Option<&str>, page: PageRequest) -> Self {
        Self {
            pattern: query.and_then(like_pattern),
            page,
        }
    }
}
