//! Repository for the `categorias` table.

use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::categoria::{Categoria, CategoriaInput};
use crate::models::listing::ListFilter;

const COLUMNS: &str = "id, nome, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoriaRepo;

impl CategoriaRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CategoriaInput) -> Result<Categoria, sqlx::Error> {
        let query = format!("INSERT INTO categorias (nome) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Categoria>(&query)
            .bind(input.nome.trim())
            .fetch_one(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Categoria>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categorias WHERE id = $1");
        sqlx::query_as::<_, Categoria>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of categories, ordered by name.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<Categoria>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categorias
             WHERE ($1::TEXT IS NULL OR nome ILIKE $1)
             ORDER BY nome ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Categoria>(&query)
            .bind(&filter.pattern)
            .bind(filter.page.limit())
            .bind(filter.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count categories matching the filter.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM categorias WHERE ($1::TEXT IS NULL OR nome ILIKE $1)",
        )
        .bind(&filter.pattern)
        .fetch_one(pool)
        .await
    }

    /// Rename a category. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoriaInput,
    ) -> Result<Option<Categoria>, sqlx::Error> {
        let query = format!("UPDATE categorias SET nome = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Categoria>(&query)
            .bind(id)
            .bind(input.nome.trim())
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categorias WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
