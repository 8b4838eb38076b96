//! Repository for the `ativos` table and its `ativo_categorias` links.

use carteira_core::types::DbId;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::models::ativo::{Ativo, AtivoFilter, CreateAtivo, UpdateAtivo};

/// Asset columns joined with the type name and aggregated category ids.
const SELECT: &str = "SELECT a.id, a.nome, a.ticker, a.tipo_id, t.nome AS tipo_nome, \
        COALESCE( \
            ARRAY_AGG(ac.categoria_id ORDER BY ac.categoria_id) \
                FILTER (WHERE ac.categoria_id IS NOT NULL), \
            '{}'::BIGINT[] \
        ) AS categoria_ids, \
        a.created_at, a.updated_at \
    FROM ativos a \
    LEFT JOIN tipos t ON t.id = a.tipo_id \
    LEFT JOIN ativo_categorias ac ON ac.ativo_id = a.id";

const GROUP_BY: &str = "GROUP BY a.id, t.nome";

/// Listing filter over `ativos a LEFT JOIN tipos t`.
const FILTER: &str = "($1::TEXT IS NULL OR a.nome ILIKE $1 OR a.ticker ILIKE $1 OR t.nome ILIKE $1) \
    AND ($2::BIGINT IS NULL OR a.tipo_id = $2) \
    AND ($3::BIGINT IS NULL OR EXISTS ( \
        SELECT 1 FROM ativo_categorias f WHERE f.ativo_id = a.id AND f.categoria_id = $3))";

/// Provides CRUD operations for assets.
pub struct AtivoRepo;

impl AtivoRepo {
    /// Insert a new asset and its category links in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateAtivo) -> Result<Ativo, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO ativos (nome, ticker, tipo_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(input.nome.trim())
        .bind(&input.ticker)
        .bind(input.tipo_id)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(ids) = &input.categoria_ids {
            Self::set_categorias_inner(&mut tx, id, ids).await?;
        }

        let ativo = Self::fetch(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit().await?;
        Ok(ativo)
    }

    /// Find an asset by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ativo>, sqlx::Error> {
        Self::fetch(pool, id).await
    }

    /// List one page of assets, ordered by name.
    pub async fn list(pool: &PgPool, filter: &AtivoFilter) -> Result<Vec<Ativo>, sqlx::Error> {
        let query = format!(
            "{SELECT} WHERE {FILTER} {GROUP_BY} ORDER BY a.nome ASC, a.id ASC LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Ativo>(&query)
            .bind(&filter.base.pattern)
            .bind(filter.tipo_id)
            .bind(filter.categoria_id)
            .bind(filter.base.page.limit())
            .bind(filter.base.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count assets matching the filter.
    pub async fn count(pool: &PgPool, filter: &AtivoFilter) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM ativos a LEFT JOIN tipos t ON t.id = a.tipo_id WHERE {FILTER}"
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.base.pattern)
            .bind(filter.tipo_id)
            .bind(filter.categoria_id)
            .fetch_one(pool)
            .await
    }

    /// Update an asset. Only non-`None` fields are applied; a present
    /// `categoria_ids` replaces the category set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAtivo,
    ) -> Result<Option<Ativo>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE ativos SET
                nome = COALESCE($2, nome),
                ticker = COALESCE($3, ticker),
                tipo_id = COALESCE($4, tipo_id)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(input.nome.as_deref().map(str::trim))
        .bind(&input.ticker)
        .bind(input.tipo_id)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(ids) = &input.categoria_ids {
            Self::set_categorias_inner(&mut tx, id, ids).await?;
        }

        let ativo = Self::fetch(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(ativo)
    }

    /// Delete an asset by ID. Category links are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ativos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn fetch<'e, E>(executor: E, id: DbId) -> Result<Option<Ativo>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("{SELECT} WHERE a.id = $1 {GROUP_BY}");
        sqlx::query_as::<_, Ativo>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Replace the category links of an asset within a transaction.
    async fn set_categorias_inner(
        tx: &mut Transaction<'_, Postgres>,
        ativo_id: DbId,
        categoria_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM ativo_categorias WHERE ativo_id = $1")
            .bind(ativo_id)
            .execute(&mut **tx)
            .await?;

        if !categoria_ids.is_empty() {
            sqlx::query(
                "INSERT INTO ativo_categorias (ativo_id, categoria_id)
                 SELECT $1, UNNEST($2::BIGINT[])
                 ON CONFLICT DO NOTHING",
            )
            .bind(ativo_id)
            .bind(categoria_ids)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
