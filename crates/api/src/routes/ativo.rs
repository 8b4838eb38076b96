//! Route definitions for the `/ativos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ativo;
use crate::state::AppState;

/// Routes mounted at `/ativos`.
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
        .route("/", get(ativo::list).post(ativo::create))
        .route(
            "/{id}",
            get(ativo::get_by_id)
                .put(ativo::update)
                .post(ativo::update)
                .delete(ativo::delete),
        )
}
