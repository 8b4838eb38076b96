use axum::{routing::get, Router};

use crate::handlers::diagnostic;
use crate::state::AppState;

/// Mount `GET /query` at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/query", get(diagnostic::fixed_amount_invoices))
}
