//! Domain types, validation rules, and error definitions shared by the
//! database and HTTP layers. Nothing in this crate performs I/O.

pub mod command;
pub mod entity;
pub mod error;
pub mod forms;
pub mod invoice;
pub mod pagination;
pub mod search;
pub mod types;
pub mod validation;
