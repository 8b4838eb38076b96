//! Repository for the `invoices` table.

use carteira_core::invoice::LATEST_INVOICES_LIMIT;
use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{
    CreateInvoice, Invoice, InvoiceAmount, InvoiceFilter, InvoiceWithCustomer, UpdateInvoice,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, amount, status, date, created_at, updated_at";

/// Invoice columns joined with the customer, over `invoices i JOIN customers c`.
const JOINED: &str = "i.id, i.customer_id, i.amount, i.status, i.date, c.name, c.email, c.image_url";

/// Free-text filter over customer, amount, date and status.
const FILTER: &str = "($1::TEXT IS NULL
        OR c.name ILIKE $1
        OR c.email ILIKE $1
        OR i.amount::TEXT ILIKE $1
        OR i.date::TEXT ILIKE $1
        OR i.status ILIKE $1)
    AND ($2::BIGINT IS NULL OR i.customer_id = $2)";

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row.
    ///
    /// `date` defaults to the current date.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (customer_id, amount, status, date)
             VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.customer_id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of invoices with their customers, most recent first.
    pub async fn list(
        pool: &PgPool,
        filter: &InvoiceFilter,
    ) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED}
             FROM invoices i
             JOIN customers c ON c.id = i.customer_id
             WHERE {FILTER}
             ORDER BY i.date DESC, i.id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, InvoiceWithCustomer>(&query)
            .bind(&filter.base.pattern)
            .bind(filter.customer_id)
            .bind(filter.base.page.limit())
            .bind(filter.base.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count invoices matching the filter.
    pub async fn count(pool: &PgPool, filter: &InvoiceFilter) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*)
             FROM invoices i
             JOIN customers c ON c.id = i.customer_id
             WHERE {FILTER}"
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.base.pattern)
            .bind(filter.customer_id)
            .fetch_one(pool)
            .await
    }

    /// The most recent invoices with their customers.
    pub async fn latest(pool: &PgPool) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED}
             FROM invoices i
             JOIN customers c ON c.id = i.customer_id
             ORDER BY i.date DESC, i.id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, InvoiceWithCustomer>(&query)
            .bind(LATEST_INVOICES_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Invoices with exactly `amount`, paired with the customer name.
    pub async fn with_amount(pool: &PgPool, amount: i64) -> Result<Vec<InvoiceAmount>, sqlx::Error> {
        sqlx::query_as::<_, InvoiceAmount>(
            "SELECT i.amount, c.name
             FROM invoices i
             JOIN customers c ON c.id = i.customer_id
             WHERE i.amount = $1
             ORDER BY i.id ASC",
        )
        .bind(amount)
        .fetch_all(pool)
        .await
    }

    /// Update an invoice. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET
                customer_id = COALESCE($2, customer_id),
                amount = COALESCE($3, amount),
                status = COALESCE($4, status),
                date = COALESCE($5, date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.customer_id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invoice by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
