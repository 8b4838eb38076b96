//! Bank (`bancos`) model and DTOs.

use carteira_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `bancos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Banco {
    pub id: DbId,
    pub nome: String,
    /// Interbank clearing code, e.g. `341`.
    pub codigo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new bank.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateBanco {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the bank's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub nome: String,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(custom(function = "carteira_core::validation::bank_code"))]
    pub codigo: Option<String>,
}

/// DTO for updating a bank.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBanco {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the bank's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(custom(function = "carteira_core::validation::bank_code"))]
    pub codigo: Option<String>,
}
