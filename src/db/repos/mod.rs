//! Database repositories
//!
//! Each repo borrows the pool and owns the SQL for one table.
//! Handlers never write queries directly.

pub mod posts;
pub mod users;

pub use posts::{Post, PostAuthor, PostRepo, PostWithAuthor};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} '{value}' already exists")]
    Conflict {
        resource: &'static str,
        value: String,
    },
}
