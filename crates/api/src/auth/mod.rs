//! Credential handling for dashboard users.

pub mod password;
