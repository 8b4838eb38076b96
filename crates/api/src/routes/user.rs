//! Route definitions for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /by-email/{email}  -> get_by_email
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// POST   /{id}              -> update (form)
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/by-email/{email}", get(user::get_by_email))
        .route(
            "/{id}",
            get(user::get_by_id)
                .put(user::update)
                .post(user::update)
                .delete(user::delete),
        )
}
