//! Dashboard user model and DTOs.

use carteira_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table. The password hash is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The plaintext password is hashed before
/// it reaches the repository.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 200, message = "Please enter a name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

/// DTO for updating a user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(
        length(min = 1, max = 200, message = "Please enter a name."),
        custom(function = "carteira_core::validation::not_blank")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "carteira_core::forms::empty_string_as_none")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: Option<String>,
}
