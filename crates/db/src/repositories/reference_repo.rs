//! Existence checks for records referenced by other records.

use carteira_core::entity::EntityKind;
use carteira_core::types::DbId;
use sqlx::PgPool;

/// Looks up referenced rows before a write so missing references can be
/// reported against the submitted field.
pub struct ReferenceRepo;

impl ReferenceRepo {
    /// Whether a row of `kind` with `id` exists.
    pub async fn exists(pool: &PgPool, kind: EntityKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            kind.collection()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// The subset of `ids` with no row of `kind`, in input order.
    pub async fn missing(
        pool: &PgPool,
        kind: EntityKind,
        ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT wanted.id
             FROM UNNEST($1::BIGINT[]) WITH ORDINALITY AS wanted(id, pos)
             WHERE NOT EXISTS (SELECT 1 FROM {} t WHERE t.id = wanted.id)
             ORDER BY wanted.pos",
            kind.collection()
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
