//! Diagnostic query over invoices with a fixed amount.

use axum::extract::State;
use axum::Json;
use carteira_core::invoice::DIAGNOSTIC_AMOUNT;
use carteira_db::models::invoice::InvoiceAmount;
use carteira_db::repositories::InvoiceRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /query
///
/// Bare array of `{amount, name}` for every invoice of the diagnostic amount.
pub async fn fixed_amount_invoices(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InvoiceAmount>>> {
    let rows = InvoiceRepo::with_amount(&state.pool, DIAGNOSTIC_AMOUNT).await?;
    tracing::debug!(rows = rows.len(), amount = DIAGNOSTIC_AMOUNT, "Diagnostic invoice query");
    Ok(Json(rows))
}
