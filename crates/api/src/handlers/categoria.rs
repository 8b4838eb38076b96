//! Handlers for the `/categorias` resource.

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
use carteira_db::models::categoria::{Categoria, CategoriaInput};
use carteira_db::repositories::CategoriaRepo;

use crate::cache;
use crate::error::{AppError, AppResult};
use crate::extract::Submission;
use crate::handlers::command;
use crate::query::ListParams;
use crate::response::{written, DataResponse, PagedResponse};
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Categoria;

/// POST /api/v1/categorias
pub async fn create(
    State(state): State<AppState>,
    Submission { input, kind }: Submission<CategoriaInput>,
) -> AppResult<Response> {
    validate_input(&input)?;
    let categoria = CategoriaRepo::create(&state.pool, &input).await?;
    state.listings.invalidate(KIND);
    tracing::info!(id = categoria.id, "Categoria created");
    Ok(written(kind, KIND, StatusCode::CREATED, categoria))
}

/// GET /api/v1/categorias
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
    let categorias = CategoriaRepo::list(&state.pool, &filter).await?;
    let total = CategoriaRepo::count(&state.pool, &filter).await?;
    let page = PageInfo::new(filter.page, total);
    Ok(cache::with_etag(etag, Json(PagedResponse::new(categorias, page))))
}

/// GET /api/v1/categorias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Categoria>>> {
    let categoria = CategoriaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    Ok(Json(DataResponse { data: categoria }))
}

/// PUT|POST /api/v1/categorias/{id}
///
/// Renames the record; `nome` is the only field.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Submission { input, kind }: Submission<CategoriaInput>,
) -> AppResult<Response> {
    validate_input(&input)?;
    let categoria = CategoriaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    state.listings.invalidate(KIND);
    tracing::info!(id, "Categoria updated");
    Ok(written(kind, KIND, StatusCode::OK, categoria))
}

/// DELETE /api/v1/categorias/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    command::dispatch(&state, EntityCommand::delete(KIND, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
