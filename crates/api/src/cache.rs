//! Listing invalidation exposed as HTTP validators.
//!
//! Every entity has a version counter that is bumped whenever the entity, or
//! an entity its listing embeds, is written. Listing responses carry a weak
//! `ETag` derived from the counter, so a client revalidating with
//! `If-None-Match` gets `304 Not Modified` until the next write.
//!
//! Counters start over on restart; the per-process nonce keeps tags from an
//! earlier process from matching.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use axum::http::header::{ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use carteira_core::entity::EntityKind;

/// Per-entity listing versions.
#[derive(Debug)]
pub struct ListingVersions {
    nonce: u64,
    versions: [AtomicU64; EntityKind::ALL.len()],
}

impl ListingVersions {
    pub fn new() -> Self {
        Self {
            nonce: uuid::Uuid::new_v4().as_u64_pair().0,
            versions: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }

    pub fn version(&self, kind: EntityKind) -> u64 {
        self.versions[kind as usize].load(Ordering::Acquire)
    }

    /// Mark the listing of `kind` and of every entity embedding it as stale.
    pub fn invalidate(&self, kind: EntityKind) {
        self.versions[kind as usize].fetch_add(1, Ordering::AcqRel);
        for dependent in kind.dependents() {
            self.versions[*dependent as usize].fetch_add(1, Ordering::AcqRel);
        }
    }

    /// Weak validator for the current listing of `kind` requested with the
    /// raw query string `query`. Each distinct query gets its own tag.
    pub fn etag(&self, kind: EntityKind, query: Option<&str>) -> String {
        let base = format!("{}-{:x}-{}", kind.collection(), self.nonce, self.version(kind));
        match query.filter(|q| !q.is_empty()) {
            Some(query) => {
                let mut hasher = DefaultHasher::new();
                query.hash(&mut hasher);
                format!("W/\"{base}-{:x}\"", hasher.finish())
            }
            None => format!("W/\"{base}\""),
        }
    }
}

impl Default for ListingVersions {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `If-None-Match` matches `etag` under weak comparison.
pub fn is_fresh(headers: &HeaderMap, etag: &str) -> bool {
    let wanted = opaque(etag);
    headers
        .get_all(IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|candidate| candidate == "*" || opaque(candidate) == wanted)
}

fn opaque(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}

/// `304 Not Modified` carrying the current validator.
pub fn not_modified(etag: String) -> Response {
    (StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response()
}

/// Attach the validator to a listing response.
pub fn with_etag(etag: String, body: impl IntoResponse) -> Response {
    ([(ETAG, etag)], body).into_response()
}
