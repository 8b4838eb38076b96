//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! DTOs accept both form-encoded and JSON submissions; see
//! [`carteira_core::forms`].

pub mod ativo;
pub mod banco;
pub mod categoria;
pub mod cliente;
pub mod customer;
pub mod dashboard;
pub mod investimento;
pub mod invoice;
pub mod listing;
pub mod tipo;
pub mod user;
