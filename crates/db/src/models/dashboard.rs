//! Dashboard summary model.

use serde::Serialize;
use sqlx::FromRow;

/// Figures shown on the dashboard cards. Totals are in minor units.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: i64,
    pub total_pending_invoices: i64,
}
