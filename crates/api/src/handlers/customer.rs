//! Handlers for the `/customers` resource.

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use carteira_core::command::EntityCommand;
use carteira_core::entity::EntityKind;
use carteira_core::error::CoreError;
use carteira_core::pagination::PageInfo;
use carteira_core::types::DbId;
use carteira_core::validation::validate_input;
use carteira_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use carteira_db::repositories::CustomerRepo;

use crate::cache;
use crate::error::{AppError, AppResult};
use crate::extract::Submission;
use crate::handlers::command;
use crate::query::ListParams;
use crate::response::{written, DataResponse, PagedResponse};
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Customer;

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    Submission { input, kind }: Submission<CreateCustomer>,
) -> AppResult<Response> {
    validate_input(&input)?;
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    state.listings.invalidate(KIND);
    tracing::info!(id = customer.id, "Customer created");
    Ok(written(kind, KIND, StatusCode::CREATED, customer))
}

/// GET /api/v1/customers
///
/// Each row carries the customer's invoice count and paid/pending totals.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    let etag = state.listings.etag(KIND, raw_query.as_deref());
    if cache::is_fresh(&headers, &etag) {
        return Ok(cache::not_modified(etag));
    }

    let filter = params.filter();
    let customers = CustomerRepo::list(&state.pool, &filter).await?;
    let total = CustomerRepo::count(&state.pool, &filter).await?;
    let page = PageInfo::new(filter.page, total);
    Ok(cache::with_etag(etag, Json(PagedResponse::new(customers, page))))
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    Ok(Json(DataResponse { data: customer }))
}

/// PUT|POST /api/v1/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Submission { input, kind }: Submission<UpdateCustomer>,
) -> AppResult<Response> {
    validate_input(&input)?;
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    state.listings.invalidate(KIND);
    tracing::info!(id, "Customer updated");
    Ok(written(kind, KIND, StatusCode::OK, customer))
}

/// DELETE /api/v1/customers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    command::dispatch(&state, EntityCommand::delete(KIND, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
