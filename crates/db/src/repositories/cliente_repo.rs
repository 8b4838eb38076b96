//! Repository for the `clientes` table.

use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::cliente::{Cliente, CreateCliente, UpdateCliente};
use crate::models::listing::ListFilter;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, email, telefone, created_at, updated_at";

/// Text filter shared by `list` and `count`.
const FILTER: &str = "($1::TEXT IS NULL OR nome ILIKE $1 OR email ILIKE $1 OR telefone ILIKE $1)";

/// Provides CRUD operations for clients.
pub struct ClienteRepo;

impl ClienteRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCliente) -> Result<Cliente, sqlx::Error> {
        let query = format!(
            "INSERT INTO clientes (nome, email, telefone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(input.nome.trim())
            .bind(input.email.trim())
            .bind(&input.telefone)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clientes WHERE id = $1");
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of clients matching the filter, ordered by name.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<Cliente>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clientes
             WHERE {FILTER}
             ORDER BY nome ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(&filter.pattern)
            .bind(filter.page.limit())
            .bind(filter.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count clients matching the filter.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM clientes WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.pattern)
            .fetch_one(pool)
            .await
    }

    /// Update a client. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCliente,
    ) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!(
            "UPDATE clientes SET
                nome = COALESCE($2, nome),
                email = COALESCE($3, email),
                telefone = COALESCE($4, telefone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .bind(input.nome.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(&input.telefone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign-key violation while investments reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
