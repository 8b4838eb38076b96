//! Repository for the `bancos` table.

use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::banco::{Banco, CreateBanco, UpdateBanco};
use crate::models::listing::ListFilter;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, codigo, created_at, updated_at";

const FILTER: &str = "($1::TEXT IS NULL OR nome ILIKE $1 OR codigo ILIKE $1)";

/// Provides CRUD operations for banks.
pub struct BancoRepo;

impl BancoRepo {
    /// Insert a new bank, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBanco) -> Result<Banco, sqlx::Error> {
        let query = format!(
            "INSERT INTO bancos (nome, codigo)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banco>(&query)
            .bind(input.nome.trim())
            .bind(&input.codigo)
            .fetch_one(pool)
            .await
    }

    /// Find a bank by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Banco>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bancos WHERE id = $1");
        sqlx::query_as::<_, Banco>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of banks, ordered by name.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<Banco>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bancos
             WHERE {FILTER}
             ORDER BY nome ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Banco>(&query)
            .bind(&filter.pattern)
            .bind(filter.page.limit())
            .bind(filter.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count banks matching the filter.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM bancos WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.pattern)
            .fetch_one(pool)
            .await
    }

    /// Update a bank. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBanco,
    ) -> Result<Option<Banco>, sqlx::Error> {
        let query = format!(
            "UPDATE bancos SET
                nome = COALESCE($2, nome),
                codigo = COALESCE($3, codigo)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banco>(&query)
            .bind(id)
            .bind(input.nome.as_deref().map(str::trim))
            .bind(&input.codigo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bank by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bancos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
