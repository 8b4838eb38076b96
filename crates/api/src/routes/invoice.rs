//! Route definitions for the `/invoices` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::invoice;
use crate::state::AppState;

/// Routes mounted at `/invoices`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /latest   -> latest
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// POST   /{id}     -> update (form)
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(invoice::list).post(invoice::create))
        .route("/latest", get(invoice::latest))
        .route(
            "/{id}",
            get(invoice::get_by_id)
                .put(invoice::update)
                .post(invoice::update)
                .delete(invoice::delete),
        )
}
