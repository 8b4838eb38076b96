//! Route definitions for the `/tipos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tipo;
use crate::state::AppState;

/// Routes mounted at `/tipos`.
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
        .route("/", get(tipo::list).post(tipo::create))
        .route(
            "/{id}",
            get(tipo::get_by_id)
                .put(tipo::update)
                .post(tipo::update)
                .delete(tipo::delete),
        )
}
