//! Repository for the `users` table.

use carteira_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::ListFilter;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

const FILTER: &str = "($1::TEXT IS NULL OR name ILIKE $1 OR email ILIKE $1)";

/// Provides CRUD operations for dashboard users.
///
/// Callers hash passwords before handing them to this repository.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with an already-hashed password.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUser,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email.trim())
            .fetch_optional(pool)
            .await
    }

    /// List one page of users, ordered by name.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE {FILTER}
             ORDER BY name ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&filter.pattern)
            .bind(filter.page.limit())
            .bind(filter.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count users matching the filter.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM users WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.pattern)
            .fetch_one(pool)
            .await
    }

    /// Update a user. `password_hash` replaces the stored hash when present.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
        password_hash: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
