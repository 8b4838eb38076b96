//! Aggregate queries backing the dashboard cards.

use carteira_core::invoice::{STATUS_PAID, STATUS_PENDING};
use sqlx::PgPool;

use crate::models::dashboard::CardData;

/// Read-only dashboard aggregates.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Invoice and customer counts plus paid/pending totals, in one round trip.
    pub async fn card_data(pool: &PgPool) -> Result<CardData, sqlx::Error> {
        sqlx::query_as::<_, CardData>(
            "SELECT
                (SELECT COUNT(*) FROM invoices) AS number_of_invoices,
                (SELECT COUNT(*) FROM customers) AS number_of_customers,
                (SELECT COALESCE(SUM(amount), 0)::BIGINT FROM invoices WHERE status = $1)
                    AS total_paid_invoices,
                (SELECT COALESCE(SUM(amount), 0)::BIGINT FROM invoices WHERE status = $2)
                    AS total_pending_invoices",
        )
        .bind(STATUS_PAID)
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await
    }
}
