//! Asset type (`tipos`) model and DTOs.

use carteira_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tipos` table (e.g. "Renda Fixa", "Ações").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tipo {
    pub id: DbId,
    pub nome: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or renaming an asset type.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TipoInput {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Please enter the type's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub nome: String,
}
