//! The record kinds managed by the service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Every entity with a listing and CRUD mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Ativo,
    Banco,
    Categoria,
    Cliente,
    Customer,
    Investimento,
    Invoice,
    Tipo,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Ativo,
        EntityKind::Banco,
        EntityKind::Categoria,
        EntityKind::Cliente,
        EntityKind::Customer,
        EntityKind::Investimento,
        EntityKind::Invoice,
        EntityKind::Tipo,
        EntityKind::User,
    ];

    /// Name used in error messages (`"Invoice with id 4 not found"`).
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Ativo => "Ativo",
            EntityKind::Banco => "Banco",
            EntityKind::Categoria => "Categoria",
            EntityKind::Cliente => "Cliente",
            EntityKind::Customer => "Customer",
            EntityKind::Investimento => "Investimento",
            EntityKind::Invoice => "Invoice",
            EntityKind::Tipo => "Tipo",
            EntityKind::User => "User",
        }
    }

    /// Path segment of the entity's listing (`/api/v1/{segment}`).
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Ativo => "ativos",
            EntityKind::Banco => "bancos",
            EntityKind::Categoria => "categorias",
            EntityKind::Cliente => "clientes",
            EntityKind::Customer => "customers",
            EntityKind::Investimento => "investimentos",
            EntityKind::Invoice => "invoices",
            EntityKind::Tipo => "tipos",
            EntityKind::User => "users",
        }
    }

    /// Entities whose listings embed data from this one.
    ///
    /// A write to `self` makes those listings stale as well: investment rows
    /// show client, bank and asset names; asset rows show their type and
    /// categories; customer rows carry invoice totals and invoice rows carry
    /// the customer name.
    pub fn dependents(self) -> &'static [EntityKind] {
        match self {
            EntityKind::Cliente | EntityKind::Banco | EntityKind::Ativo => {
                &[EntityKind::Investimento]
            }
            EntityKind::Tipo | EntityKind::Categoria => &[EntityKind::Ativo],
            EntityKind::Customer => &[EntityKind::Invoice],
            EntityKind::Invoice => &[EntityKind::Customer],
            EntityKind::Investimento | EntityKind::User => &[],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity '{0}'")]
pub struct UnknownEntity(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntity;

    /// Accepts the snake_case name (`invoice`) or the collection (`invoices`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                s.eq_ignore_ascii_case(kind.collection()) || s.eq_ignore_ascii_case(kind.label())
            })
            .ok_or_else(|| UnknownEntity(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for EntityKind {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(de)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
