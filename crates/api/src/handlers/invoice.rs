//! Handlers for the `/invoices` resource.

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use carteira_core::command::EntityCommand;
use carteira_core::entity::EntityKind;
use carteira_core::error::{CoreError, FieldErrors};
use carteira_core::pagination::PageInfo;
use carteira_core::types::DbId;
use carteira_core::validation::validate_input;
use carteira_db::models::invoice::{
    CreateInvoice, Invoice, InvoiceFilter, InvoiceListParams, InvoiceWithCustomer, UpdateInvoice,
};
use carteira_db::repositories::InvoiceRepo;
use carteira_db::DbPool;

use crate::cache;
use crate::error::{AppError, AppResult};
use crate::extract::Submission;
use crate::handlers::{command, references};
use crate::response::{written, DataResponse, PagedResponse};
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Invoice;

/// POST /api/v1/invoices
pub async fn create(
    State(state): State<AppState>,
    Submission { input, kind }: Submission<CreateInvoice>,
) -> AppResult<Response> {
    validate_input(&input)?;
    check_customer(&state.pool, input.customer_id).await?;

    let invoice = InvoiceRepo::create(&state.pool, &input).await?;
    state.listings.invalidate(KIND);
    tracing::info!(
        id = invoice.id,
        customer_id = invoice.customer_id,
        amount = invoice.amount,
        status = %invoice.status,
        "Invoice created"
    );
    Ok(written(kind, KIND, StatusCode::CREATED, invoice))
}

/// GET /api/v1/invoices
///
/// Filters: `query` (customer name/email, amount, date, status), `customer_id`.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<InvoiceListParams>,
) -> AppResult<Response> {
    let etag = state.listings.etag(KIND, raw_query.as_deref());
    if cache::is_fresh(&headers, &etag) {
        return Ok(cache::not_modified(etag));
    }

    let filter = InvoiceFilter::from(&params);
    let invoices = InvoiceRepo::list(&state.pool, &filter).await?;
    let total = InvoiceRepo::count(&state.pool, &filter).await?;
    let page = PageInfo::new(filter.base.page, total);
    Ok(cache::with_etag(etag, Json(PagedResponse::new(invoices, page))))
}

/// GET /api/v1/invoices/latest
pub async fn latest(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<InvoiceWithCustomer>>>> {
    let invoices = InvoiceRepo::latest(&state.pool).await?;
    Ok(Json(DataResponse { data: invoices }))
}

/// GET /api/v1/invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Invoice>>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    Ok(Json(DataResponse { data: invoice }))
}

/// PUT|POST /api/v1/invoices/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Submission { input, kind }: Submission<UpdateInvoice>,
) -> AppResult<Response> {
    validate_input(&input)?;
    check_customer(&state.pool, input.customer_id).await?;

    let invoice = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    state.listings.invalidate(KIND);
    tracing::info!(id, status = %invoice.status, "Invoice updated");
    Ok(written(kind, KIND, StatusCode::OK, invoice))
}

/// DELETE /api/v1/invoices/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    command::dispatch(&state, EntityCommand::delete(KIND, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn check_customer(pool: &DbPool, customer_id: Option<DbId>) -> AppResult<()> {
    let mut errors = FieldErrors::new();
    references::require(pool, &mut errors, "customer_id", EntityKind::Customer, customer_id)
        .await?;
    Ok(errors.into_result()?)
}
