//! Route definitions for the `/bancos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::banco;
use crate::state::AppState;

/// Routes mounted at `/bancos`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// POST   /{id}     -> update (form)
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banco::list).post(banco::create))
        .route(
            "/{id}",
            get(banco::get_by_id)
                .put(banco::update)
                .post(banco::update)
                .delete(banco::delete),
        )
}
