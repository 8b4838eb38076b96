//! Billing customer (`customers`) model and DTOs.

use carteira_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A customer with aggregated invoice totals, as shown in the customers table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub total_invoices: i64,
    /// Sum of `pendente` invoice amounts.
    pub total_pending: i64,
    /// Sum of `pago` invoice amounts.
    pub total_paid: i64,
}

/// DTO for creating a new customer.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCustomer {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the customer's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(length(max = 500, message = "Image URL is too long."))]
    pub image_url: Option<String>,
}

/// DTO for updating a customer.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCustomer {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the customer's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(length(max = 500, message = "Image URL is too long."))]
    pub image_url: Option<String>,
}
