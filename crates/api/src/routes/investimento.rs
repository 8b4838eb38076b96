//! Route definitions for the `/investimentos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::investimento;
use crate::state::AppState;

/// Routes mounted at `/investimentos`.
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
        .route("/", get(investimento::list).post(investimento::create))
        .route(
            "/{id}",
            get(investimento::get_by_id)
                .put(investimento::update)
                .post(investimento::update)
                .delete(investimento::delete),
        )
}
