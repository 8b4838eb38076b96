//! Investment (`investimentos`) model and DTOs.

use carteira_core::pagination::PageRequest;
use carteira_core::types::{Date, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::listing::ListFilter;

/// An investment row joined with the names of its client, bank and asset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Investimento {
    pub id: DbId,
    pub cliente_id: DbId,
    pub banco_id: DbId,
    pub ativo_id: DbId,
    pub valor: Decimal,
    pub data: Date,
    pub cliente_nome: String,
    pub banco_nome: String,
    pub ativo_nome: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new investment. `data` defaults to today.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInvestimento {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(required(message = "Please select a client."))]
    pub cliente_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(required(message = "Please select a bank."))]
    pub banco_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(required(message = "Please select an asset."))]
    pub ativo_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        required(message = "Please enter the invested amount."),
        custom(function = "carteira_core::validation::money_amount")
    )]
    pub valor: Option<Decimal>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub data: Option<Date>,
}

/// DTO for updating an investment.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInvestimento {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub cliente_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub banco_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub ativo_id: Option<DbId>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(custom(function = "carteira_core::validation::money_amount"))]
    pub valor: Option<Decimal>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub data: Option<Date>,
}

/// Query parameters for listing investments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvestimentoListParams {
    /// Matches client, bank or asset name.
    pub query: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    pub cliente_id: Option<DbId>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Resolved investment listing filter.
#[derive(Debug, Clone, Default)]
pub struct InvestimentoFilter {
    pub base: ListFilter,
    pub cliente_id: Option<DbId>,
}

impl From<&InvestimentoListParams> for InvestimentoFilter {
    fn from(params: &InvestimentoListParams) -> Self {
        Self {
            base: ListFilter::new(
                params.query.as_deref(),
                PageRequest::new(params.page, params.per_page),
            ),
            cliente_id: params.cliente_id,
        }
    }
}
