//! Handler for `POST /api/v1/commands` and the dispatcher behind every
//! delete route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use carteira_core::command::{EntityCommand, Operation};
use carteira_core::entity::EntityKind;
use carteira_core::error::CoreError;
use carteira_core::types::DbId;
use carteira_db::repositories::{
    AtivoRepo, BancoRepo, CategoriaRepo, ClienteRepo, CustomerRepo, InvestimentoRepo,
    InvoiceRepo, TipoRepo, UserRepo,
};

use crate::error::{AppError, AppResult};
use crate::extract::Submission;
use crate::response::written;
use crate::state::AppState;

/// POST /api/v1/commands
///
/// Accepts `{operation, entity, entity_id}` as JSON or form. Form callers are
/// redirected to the entity's listing; JSON callers get the command back.
pub async fn execute(
    State(state): State<AppState>,
    Submission { input, kind }: Submission<EntityCommand>,
) -> AppResult<Response> {
    dispatch(&state, input).await?;
    Ok(written(kind, input.entity, StatusCode::OK, input))
}

/// Run a command against the entity's repository.
pub async fn dispatch(state: &AppState, command: EntityCommand) -> AppResult<()> {
    match command.operation {
        Operation::Delete => delete_entity(state, command.entity, command.entity_id).await,
    }
}

async fn delete_entity(state: &AppState, entity: EntityKind, id: DbId) -> AppResult<()> {
    let pool = &state.pool;
    let deleted = match entity {
        EntityKind::Ativo => AtivoRepo::delete(pool, id).await?,
        EntityKind::Banco => BancoRepo::delete(pool, id).await?,
        EntityKind::Categoria => CategoriaRepo::delete(pool, id).await?,
        EntityKind::Cliente => ClienteRepo::delete(pool, id).await?,
        EntityKind::Customer => CustomerRepo::delete(pool, id).await?,
        EntityKind::Investimento => InvestimentoRepo::delete(pool, id).await?,
        EntityKind::Invoice => InvoiceRepo::delete(pool, id).await?,
        EntityKind::Tipo => TipoRepo::delete(pool, id).await?,
        EntityKind::User => UserRepo::delete(pool, id).await?,
    };

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: entity.label(),
            id,
        }));
    }

    state.listings.invalidate(entity);
    tracing::info!(%entity, id, "Record deleted");
    Ok(())
}
