//! Existence checks for submitted foreign keys.
//!
//! Missing references are collected as field errors so the caller learns
//! which field to fix, instead of getting a constraint name back from the
//! database.

use carteira_core::entity::EntityKind;
use carteira_core::error::FieldErrors;
use carteira_core::types::DbId;
use carteira_db::repositories::ReferenceRepo;
use carteira_db::DbPool;

/// Record an error on `field` when `id` is present but has no row of `kind`.
pub async fn require(
    pool: &DbPool,
    errors: &mut FieldErrors,
    field: &'static str,
    kind: EntityKind,
    id: Option<DbId>,
) -> Result<(), sqlx::Error> {
    if let Some(id) = id {
        if !ReferenceRepo::exists(pool, kind, id).await? {
            errors.add(field, missing_message(kind, id));
        }
    }
    Ok(())
}

/// Like [`require`] for a list of ids; one message per missing id.
pub async fn require_all(
    pool: &DbPool,
    errors: &mut FieldErrors,
    field: &'static str,
    kind: EntityKind,
    ids: Option<&[DbId]>,
) -> Result<(), sqlx::Error> {
    let Some(ids) = ids else {
        return Ok(());
    };
    for id in ReferenceRepo::missing(pool, kind, ids).await? {
        errors.add(field, missing_message(kind, id));
    }
    Ok(())
}

fn missing_message(kind: EntityKind, id: DbId) -> String {
    format!("{kind} with id {id} does not exist.")
}
