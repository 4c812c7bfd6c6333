//! User repository

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::Username;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, oldest first.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Create a user.
    ///
    /// Duplicate usernames surface as `DbError::Conflict` via the unique
    /// constraint. No check-then-insert pre-query.
    pub async fn create(&self, username: Username) -> Result<User, DbError> {
        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (username) VALUES ($1) RETURNING id, username",
        )
        .bind(username.as_str())
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(DbError::Conflict {
                resource: "username",
                value: username.into_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }
}

/// Check whether a sqlx error is a unique constraint violation.
fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    // Integration tests with a real database live in tests/api.rs,
    // gated behind #[ignore = "requires database"].
}
