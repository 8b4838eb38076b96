//! Handlers for the `/dashboard` resource.

use axum::extract::State;
use axum::Json;
use carteira_db::models::dashboard::CardData;
use carteira_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/cards
pub async fn cards(State(state): State<AppState>) -> AppResult<Json<DataResponse<CardData>>> {
    let data = DashboardRepo::card_data(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}
