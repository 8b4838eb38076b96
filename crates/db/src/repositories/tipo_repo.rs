//! Repository for the `tipos` table.

use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::ListFilter;
use crate::models::tipo::{Tipo, TipoInput};

const COLUMNS: &str = "id, nome, created_at, updated_at";

/// Provides CRUD operations for asset types.
pub struct TipoRepo;

impl TipoRepo {
    /// Insert a new asset type, returning the created row.
    pub async fn create(pool: &PgPool, input: &TipoInput) -> Result<Tipo, sqlx::Error> {
        let query = format!("INSERT INTO tipos (nome) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tipo>(&query)
            .bind(input.nome.trim())
            .fetch_one(pool)
            .await
    }

    /// Find an asset type by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tipo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tipos WHERE id = $1");
        sqlx::query_as::<_, Tipo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of asset types, ordered by name.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<Tipo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tipos
             WHERE ($1::TEXT IS NULL OR nome ILIKE $1)
             ORDER BY nome ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Tipo>(&query)
            .bind(&filter.pattern)
            .bind(filter.page.limit())
            .bind(filter.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count asset types matching the filter.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tipos WHERE ($1::TEXT IS NULL OR nome ILIKE $1)",
        )
        .bind(&filter.pattern)
        .fetch_one(pool)
        .await
    }

    /// Rename an asset type. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TipoInput,
    ) -> Result<Option<Tipo>, sqlx::Error> {
        let query = format!("UPDATE tipos SET nome = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tipo>(&query)
            .bind(id)
            .bind(input.nome.trim())
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset type by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tipos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
