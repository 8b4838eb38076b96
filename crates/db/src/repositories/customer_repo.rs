//! Repository for the `customers` table.

use carteira_core::invoice::{STATUS_PAID, STATUS_PENDING};
use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, CustomerSummary, UpdateCustomer};
use crate::models::listing::ListFilter;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, image_url, created_at, updated_at";

const FILTER: &str = "($1::TEXT IS NULL OR c.name ILIKE $1 OR c.email ILIKE $1)";

/// Provides CRUD operations for billing customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, email, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of customers with their invoice totals, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
    ) -> Result<Vec<CustomerSummary>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.name, c.email, c.image_url,
                    COUNT(i.id) AS total_invoices,
                    COALESCE(SUM(CASE WHEN i.status = $4 THEN i.amount ELSE 0 END), 0)::BIGINT
                        AS total_pending,
                    COALESCE(SUM(CASE WHEN i.status = $5 THEN i.amount ELSE 0 END), 0)::BIGINT
                        AS total_paid
             FROM customers c
             LEFT JOIN invoices i ON i.customer_id = c.id
             WHERE {FILTER}
             GROUP BY c.id
             ORDER BY c.name ASC, c.id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CustomerSummary>(&query)
            .bind(&filter.pattern)
            .bind(filter.page.limit())
            .bind(filter.page.offset())
            .bind(STATUS_PENDING)
            .bind(STATUS_PAID)
            .fetch_all(pool)
            .await
    }

    /// Count customers matching the filter.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM customers c WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.pattern)
            .fetch_one(pool)
            .await
    }

    /// Update a customer. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                image_url = COALESCE($4, image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by ID. Fails while invoices reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
