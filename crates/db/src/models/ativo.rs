//! Asset (`ativos`) model and DTOs.
//!
//! An asset optionally belongs to a type (`tipos`) and to any number of
//! categories through the `ativo_categorias` join table.

use carteira_core::pagination::PageRequest;
use carteira_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::listing::ListFilter;

/// An asset row joined with its type name and category ids.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ativo {
    pub id: DbId,
    pub nome: String,
    pub ticker: Option<String>,
    pub tipo_id: Option<DbId>,
    pub tipo_nome: Option<String>,
    /// Ids of linked categories, ascending.
    pub categoria_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new asset.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAtivo {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the asset's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub nome: String,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(length(max = 12, message = "Ticker must be at most 12 characters."))]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub tipo_id: Option<DbId>,
    /// Accepts `[1, 2]` (JSON) or `"1,2"` (form).
    #[serde(default, deserialize_with = "carteira_core::forms::id_list")]
    pub categoria_ids: Option<Vec<DbId>>,
}

/// DTO for updating an asset.
///
/// `categoria_ids`, when present, replaces the whole category set; an empty
/// list unlinks every category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAtivo {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        length(min = 1, max = 200, message = "Please enter the asset's name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(length(max = 12, message = "Ticker must be at most 12 characters."))]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub tipo_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::id_list")]
    pub categoria_ids: Option<Vec<DbId>>,
}

/// Query parameters for listing assets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtivoListParams {
    pub query: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub tipo_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub categoria_id: Option<DbId>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Resolved asset listing filter.
#[derive(Debug, Clone, Default)]
pub struct AtivoFilter {
    pub base: ListFilter,
    pub tipo_id: Option<DbId>,
    pub categoria_id: Option<DbId>,
}

impl From<&AtivoListParams> for AtivoFilter {
    fn from(params: &AtivoListParams) -> Self {
        Self {
            base: ListFilter::new(
                params.query.as_deref(),
                PageRequest::new(params.page, params.per_page),
            ),
            tipo_id: params.tipo_id,
            categoria_id: params.categoria_id,
        }
    }
}
