//! Route definitions for the `/clientes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cliente;
use crate::state::AppState;

/// Routes mounted at `/clientes`.
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
        .route("/", get(cliente::list).post(cliente::create))
        .route(
            "/{id}",
            get(cliente::get_by_id)
                .put(cliente::update)
                .post(cliente::update)
                .delete(cliente::delete),
        )
}
