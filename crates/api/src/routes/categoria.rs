//! Route definitions for the `/categorias` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categoria;
use crate::state::AppState;

/// Routes mounted at `/categorias`.
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
        .route("/", get(categoria::list).post(categoria::create))
        .route(
            "/{id}",
            get(categoria::get_by_id)
                .put(categoria::update)
                .post(categoria::update)
                .delete(categoria::delete),
        )
}
