//! Repository for the `investimentos` table.
//!
//! Every query returns the investment joined with its client, bank and asset
//! names. Writes use a CTE so the insert/update and the join run as one
//! statement.

use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::investimento::{
    CreateInvestimento, Investimento, InvestimentoFilter, UpdateInvestimento,
};

/// Projection over a relation aliased `i` plus the joined names.
const PROJECTION: &str = "i.id, i.cliente_id, i.banco_id, i.ativo_id, i.valor, i.data, \
    c.nome AS cliente_nome, b.nome AS banco_nome, a.nome AS ativo_nome, \
    i.created_at, i.updated_at";

const JOINS: &str = "JOIN clientes c ON c.id = i.cliente_id \
    JOIN bancos b ON b.id = i.banco_id \
    JOIN ativos a ON a.id = i.ativo_id";

const FILTER: &str = "($1::TEXT IS NULL OR c.nome ILIKE $1 OR b.nome ILIKE $1 OR a.nome ILIKE $1) \
    AND ($2::BIGINT IS NULL OR i.cliente_id = $2)";

/// Provides CRUD operations for investments.
pub struct InvestimentoRepo;

impl InvestimentoRepo {
    /// Insert a new investment, returning the joined row.
    ///
    /// `data` defaults to the current date.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInvestimento,
    ) -> Result<Investimento, sqlx::Error> {
        let query = format!(
            "WITH i AS (
                INSERT INTO investimentos (cliente_id, banco_id, ativo_id, valor, data)
                VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
                RETURNING *
             )
             SELECT {PROJECTION} FROM i {JOINS}"
        );
        sqlx::query_as::<_, Investimento>(&query)
            .bind(input.cliente_id)
            .bind(input.banco_id)
            .bind(input.ativo_id)
            .bind(input.valor)
            .bind(input.data)
            .fetch_one(pool)
            .await
    }

    /// Find an investment by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Investimento>, sqlx::Error> {
        let query = format!("SELECT {PROJECTION} FROM investimentos i {JOINS} WHERE i.id = $1");
        sqlx::query_as::<_, Investimento>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of investments, most recent first.
    pub async fn list(
        pool: &PgPool,
        filter: &InvestimentoFilter,
    ) -> Result<Vec<Investimento>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECTION} FROM investimentos i {JOINS}
             WHERE {FILTER}
             ORDER BY i.data DESC, i.id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Investimento>(&query)
            .bind(&filter.base.pattern)
            .bind(filter.cliente_id)
            .bind(filter.base.page.limit())
            .bind(filter.base.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count investments matching the filter.
    pub async fn count(pool: &PgPool, filter: &InvestimentoFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM investimentos i {JOINS} WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.base.pattern)
            .bind(filter.cliente_id)
            .fetch_one(pool)
            .await
    }

    /// Update an investment. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvestimento,
    ) -> Result<Option<Investimento>, sqlx::Error> {
        let query = format!(
            "WITH i AS (
                UPDATE investimentos SET
                    cliente_id = COALESCE($2, cliente_id),
                    banco_id = COALESCE($3, banco_id),
                    ativo_id = COALESCE($4, ativo_id),
                    valor = COALESCE($5, valor),
                    data = COALESCE($6, data)
                WHERE id = $1
                RETURNING *
             )
             SELECT {PROJECTION} FROM i {JOINS}"
        );
        sqlx::query_as::<_, Investimento>(&query)
            .bind(id)
            .bind(input.cliente_id)
            .bind(input.banco_id)
            .bind(input.ativo_id)
            .bind(input.valor)
            .bind(input.data)
            .fetch_optional(pool)
            .await
    }

    /// Delete an investment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM investimentos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
