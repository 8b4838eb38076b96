//! Invoice model and DTOs.
//!
//! `amount` is stored in minor currency units (cents) exactly as submitted.

use carteira_core::pagination::PageRequest;
use carteira_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::listing::ListFilter;

/// A row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub customer_id: DbId,
    pub amount: i64,
    /// One of [`carteira_core::invoice::VALID_STATUSES`].
    pub status: String,
    pub date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An invoice joined with its customer, as shown in invoice listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvoiceWithCustomer {
    pub id: DbId,
    pub customer_id: DbId,
    pub amount: i64,
    pub status: String,
    pub date: Date,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

/// Row returned by the diagnostic fixed-amount query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct InvoiceAmount {
    pub amount: i64,
    pub name: String,
}

/// DTO for creating a new invoice. `date` defaults to today.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInvoice {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(required(message = "Please select a customer."))]
    pub customer_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        required(message = "Please enter an amount greater than 0."),
        range(min = 1, message = "Please enter an amount greater than 0.")
    )]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        required(message = "Please select an invoice status."),
        custom(function = "carteira_core::invoice::status_rule")
    )]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub date: Option<Date>,
}

/// DTO for updating an invoice.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInvoice {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub customer_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(range(min = 1, message = "Please enter an amount greater than 0."))]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(custom(function = "carteira_core::invoice::status_rule"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub date: Option<Date>,
}

/// Query parameters for listing invoices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceListParams {
    /// Matches customer name/email, amount, date or status.
    pub query: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub customer_id: Option<DbId>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Resolved invoice listing filter.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub base: ListFilter,
    pub customer_id: Option<DbId>,
}

impl From<&InvoiceListParams> for InvoiceFilter {
    fn from(params: &InvoiceListParams) -> Self {
        Self {
            base: ListFilter::new(
                params.query.as_deref(),
                PageRequest::new(params.page, params.per_page),
            ),
            customer_id: params.customer_id,
        }
    }
}
