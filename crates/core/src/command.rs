//! Explicit mutation commands.
//!
//! A delete control on a listing submits `{operation, entity, entity_id}`
//! instead of binding the id into a handler. The HTTP layer dispatches the
//! command to the entity's repository.

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;
use crate::types::DbId;

/// The mutation a command requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Delete,
}

/// A single-record mutation addressed by entity kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCommand {
    pub operation: Operation,
    pub entity: EntityKind,
    pub entity_id: DbId,
}

impl EntityCommand {
    pub fn delete(entity: EntityKind, entity_id: DbId) -> Self {
        Self {
            operation: Operation::Delete,
            entity,
            entity_id,
        }
    }
}
