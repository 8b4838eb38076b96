//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Listings add the
//! pagination fields next to `data`.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use carteira_core::entity::EntityKind;
use carteira_core::pagination::PageInfo;
use serde::Serialize;

use crate::extract::SubmissionKind;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "page", "per_page", "total", "total_pages" }`.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub data: Vec<T>,
    #[serde(flatten)]
    pub page: PageInfo,
}

impl<T: Serialize> PagedResponse<T> {
    pub fn new(data: Vec<T>, page: PageInfo) -> Self {
        Self { data, page }
    }
}

/// Path of an entity's listing, where successful writes send the caller.
pub fn listing_path(kind: EntityKind) -> String {
    format!("/api/v1/{}", kind.collection())
}

/// Answer a successful write.
///
/// Form submitters are redirected to the listing with `303 See Other`;
/// JSON callers get the written record with `Location` naming the listing.
pub fn written<T: Serialize>(
    submission: SubmissionKind,
    kind: EntityKind,
    status: StatusCode,
    data: T,
) -> Response {
    let location = listing_path(kind);
    match submission {
        SubmissionKind::Form => Redirect::to(&location).into_response(),
        SubmissionKind::Json => (
            status,
            [(LOCATION, location)],
            Json(DataResponse { data }),
        )
            .into_response(),
    }
}
