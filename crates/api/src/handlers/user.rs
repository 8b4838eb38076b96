//! Handlers for the `/users` resource.
//!
//! Plaintext passwords never reach the repository: they are hashed here and
//! the hash is never serialized back.

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
use carteira_db::models::user::{CreateUser, UpdateUser, User};
use carteira_db::repositories::UserRepo;

use crate::auth::password::hash_for_storage;
use crate::cache;
use crate::error::{AppError, AppResult};
use crate::extract::Submission;
use crate::handlers::command;
use crate::query::ListParams;
use crate::response::{written, DataResponse, PagedResponse};
use crate::state::AppState;

const KIND: EntityKind = EntityKind::User;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Submission { input, kind }: Submission<CreateUser>,
) -> AppResult<Response> {
    validate_input(&input)?;
    let password_hash = hash_for_storage(&input.password)?;
    let user = UserRepo::create(&state.pool, &input, &password_hash).await?;
    state.listings.invalidate(KIND);
    tracing::info!(id = user.id, "User created");
    Ok(written(kind, KIND, StatusCode::CREATED, user))
}

/// GET /api/v1/users
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
    let users = UserRepo::list(&state.pool, &filter).await?;
    let total = UserRepo::count(&state.pool, &filter).await?;
    let page = PageInfo::new(filter.page, total);
    Ok(cache::with_etag(etag, Json(PagedResponse::new(users, page))))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}

/// GET /api/v1/users/by-email/{email}
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with email {email} not found")))?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT|POST /api/v1/users/{id}
///
/// A blank or absent `password` keeps the stored hash.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Submission { input, kind }: Submission<UpdateUser>,
) -> AppResult<Response> {
    validate_input(&input)?;
    let password_hash = input
        .password
        .as_deref()
        .map(hash_for_storage)
        .transpose()?;

    let user = UserRepo::update(&state.pool, id, &input, password_hash.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.label(),
            id,
        }))?;
    state.listings.invalidate(KIND);
    tracing::info!(id, password_changed = password_hash.is_some(), "User updated");
    Ok(written(kind, KIND, StatusCode::OK, user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    command::dispatch(&state, EntityCommand::delete(KIND, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
