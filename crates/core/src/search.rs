//! Listing filter helpers.
//!
//! Listings accept a free-text `query` that is matched case-insensitively
//! against an entity's text columns with `ILIKE`.

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Longest accepted free-text filter. Longer input is truncated.
pub const MAX_QUERY_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Convert user input into an `ILIKE` substring pattern.
///
/// - Surrounding whitespace is trimmed.
/// - `%`, `_` and `\` are escaped so they match literally.
/// - Empty or whitespace-only input returns `None` (no filter).
///
/// # Examples
///
/// ```
/// use carteira_core::search::like_pattern;
/// assert_eq!(like_pattern("lee"), Some("%lee%".to_string()));
/// assert_eq!(like_pattern("50%"), Some("%50\\%%".to_string()));
/// assert_eq!(like_pattern("   "), None);
/// ```
pub fn like_pattern(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(trimmed.len() + 2);
    pattern.push('%');
    for c in trimmed.chars().take(MAX_QUERY_LENGTH) {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
