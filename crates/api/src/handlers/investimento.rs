//! Handlers for the `/investimentos` resource.

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
use carteira_db::models::investimento::{
    CreateInvestimento, Investimento, InvestimentoFilter, InvestimentoListParams,
    UpdateInvestimento,
};
use carteira_db::repositories::InvestimentoRepo;
use carteira_db::DbPool;

use crate::cache;
use crate::error::{AppError, AppResult};
use crate::extract::Submission;
use crate::handlers::{command, references};
use crate::response::{written, DataResponse, PagedResponse};
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Investimento;

/// Submitted references of an investment, any of which may be absent.
struct Refs {
    cliente_id: Option<DbId>,
    banco_id: Option<DbId>,
    ativo_id: Option<DbId>,
}

/// POST /api/v1/investimentos
pub async fn create(
    State(state): State<AppState>,
    Submission { input, kind }: Submission<CreateInvestimento>,
) -> AppResult<Response> {
    validate_input(&input)?;
    check_references(
        &state.pool,
        Refs {
            cliente_id: input.cliente_id,
            banco_id: input.banco_id,
            ativo_id: input.ativo_id,
        },
    )
    .await?;

    let investimento = InvestimentoRepo::create(&state.pool, &input).await?;
    state.listings.invalidate(KIND);
    tracing::info!(
        id = investimento.id,
        cliente_id = investimento.cliente_id,
        "Investimento created"
    );
    Ok(written(kind, KIND, StatusCode::CREATED, investimento))
}

/// GET /api/v1/investimentos
///
/// Filters: `query` (client, bank or asset name), `cliente_id`.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<InvestimentoListParams>,
) -> AppResult<Response> {
    let etag = state.listings.etag(KIND, raw_query.as_deref());
    if cache::is_fresh(&headers, &etag) {
        return Ok(cache::not_modified(etag));
    }

    let filter = InvestimentoFilter::from(&params);
    let investimentos = InvestimentoRepo::list(&state.pool, &filter).await?;
    let total = InvestimentoRepo::count(&state.pool, &filter).await?;
    let page = PageInfo::new(filter.base.page, total);
    Ok(cache::with_etag(
        etag,
        Json(PagedResponse::new(investimentos, page)),
    ))
}

/// GET /api/v1/investimentos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Investimento>>> {
    let investimento = InvestimentoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    Ok(Json(DataResponse { data: investimento }))
}

/// PUT|POST /api/v1/investimentos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Submission { input, kind }: Submission<UpdateInvestimento>,
) -> AppResult<Response> {
    validate_input(&input)?;
    check_references(
        &state.pool,
        Refs {
            cliente_id: input.cliente_id,
            banco_id: input.banco_id,
            ativo_id: input.ativo_id,
        },
    )
    .await?;

    let investimento = InvestimentoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    state.listings.invalidate(KIND);
    tracing::info!(id, "Investimento updated");
    Ok(written(kind, KIND, StatusCode::OK, investimento))
}

/// DELETE /api/v1/investimentos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    command::dispatch(&state, EntityCommand::delete(KIND, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn check_references(pool: &DbPool, refs: Refs) -> AppResult<()> {
    let mut errors = FieldErrors::new();
    references::require(pool, &mut errors, "cliente_id", EntityKind::Cliente, refs.cliente_id)
        .await?;
    references::require(pool, &mut errors, "banco_id", EntityKind::Banco, refs.banco_id).await?;
    references::require(pool, &mut errors, "ativo_id", EntityKind::Ativo, refs.ativo_id).await?;
    Ok(errors.into_result()?)
}
