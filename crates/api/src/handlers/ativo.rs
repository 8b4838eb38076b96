//! Handlers for the `/ativos` resource.

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
use carteira_db::models::ativo::{Ativo, AtivoFilter, AtivoListParams, CreateAtivo, UpdateAtivo};
use carteira_db::repositories::AtivoRepo;
use carteira_db::DbPool;

use crate::cache;
use crate::error::{AppError, AppResult};
use crate::extract::Submission;
use crate::handlers::{command, references};
use crate::response::{written, DataResponse, PagedResponse};
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Ativo;

/// POST /api/v1/ativos
pub async fn create(
    State(state): State<AppState>,
    Submission { input, kind }: Submission<CreateAtivo>,
) -> AppResult<Response> {
    validate_input(&input)?;
    check_references(&state.pool, input.tipo_id, input.categoria_ids.as_deref()).await?;

    let ativo = AtivoRepo::create(&state.pool, &input).await?;
    state.listings.invalidate(KIND);
    tracing::info!(id = ativo.id, categorias = ativo.categoria_ids.len(), "Ativo created");
    Ok(written(kind, KIND, StatusCode::CREATED, ativo))
}

/// GET /api/v1/ativos
///
/// Filters: `query`, `tipo_id`, `categoria_id`.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<AtivoListParams>,
) -> AppResult<Response> {
    let etag = state.listings.etag(KIND, raw_query.as_deref());
    if cache::is_fresh(&headers, &etag) {
        return Ok(cache::not_modified(etag));
    }

    let filter = AtivoFilter::from(&params);
    let ativos = AtivoRepo::list(&state.pool, &filter).await?;
    let total = AtivoRepo::count(&state.pool, &filter).await?;
    let page = PageInfo::new(filter.base.page, total);
    Ok(cache::with_etag(etag, Json(PagedResponse::new(ativos, page))))
}

/// GET /api/v1/ativos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Ativo>>> {
    let ativo = AtivoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    Ok(Json(DataResponse { data: ativo }))
}

/// PUT|POST /api/v1/ativos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Submission { input, kind }: Submission<UpdateAtivo>,
) -> AppResult<Response> {
    validate_input(&input)?;
    check_references(&state.pool, input.tipo_id, input.categoria_ids.as_deref()).await?;

    let ativo = AtivoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    state.listings.invalidate(KIND);
    tracing::info!(id, "Ativo updated");
    Ok(written(kind, KIND, StatusCode::OK, ativo))
}

/// DELETE /api/v1/ativos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    command::dispatch(&state, EntityCommand::delete(KIND, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn check_references(
    pool: &DbPool,
    tipo_id: Option<DbId>,
    categoria_ids: Option<&[DbId]>,
) -> AppResult<()> {
    let mut errors = FieldErrors::new();
    references::require(pool, &mut errors, "tipo_id", EntityKind::Tipo, tipo_id).await?;
    references::require_all(
        pool,
        &mut errors,
        "categoria_ids",
        EntityKind::Categoria,
        categoria_ids,
    )
    .await?;
    Ok(errors.into_result()?)
}
