//! Client (`clientes`) model and DTOs.

use carteira_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `clientes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cliente {
    pub id: DbId,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCliente {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the client's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub nome: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(length(max = 30, message = "Phone number is too long."))]
    pub telefone: Option<String>,
}

/// DTO for updating a client. Only submitted fields are changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCliente {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the client's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(length(max = 30, message = "Phone number is too long."))]
    pub telefone: Option<String>,
}
