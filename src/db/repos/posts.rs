//! Post repository

use sqlx::{FromRow, PgPool, Row};

use super::DbError;
use crate::models::{PostContent, PostTitle};

/// Post record from database
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// Owning user of a post, for nested display
#[derive(Debug, Clone)]
pub struct PostAuthor {
    pub id: i64,
    pub username: String,
}

/// Post joined with its author for list display
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub author: PostAuthor,
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all posts with their authors, oldest first.
    ///
    /// Single JOIN query (no N+1).
    pub async fn list(&self) -> Result<Vec<PostWithAuthor>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.user_id,
                u.username AS author_username
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let posts = rows
            .into_iter()
            .map(|r| {
                let user_id: i64 = r.get("user_id");
                PostWithAuthor {
                    id: r.get("id"),
                    title: r.get("title"),
                    content: r.get("content"),
                    user_id,
                    author: PostAuthor {
                        id: user_id,
                        username: r.get("author_username"),
                    },
                }
            })
            .collect();

        Ok(posts)
    }

    /// Create a post owned by an existing user.
    ///
    /// Callers resolve the author via `UserRepo::get` beforehand; the
    /// foreign key constraint still backstops the race where the user
    /// is deleted between that lookup and the insert, surfacing as
    /// `DbError::NotFound`.
    pub async fn create(
        &self,
        title: PostTitle,
        content: PostContent,
        user_id: i64,
    ) -> Result<Post, DbError> {
        let result = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, user_id
            "#,
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(user_id)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(post) => Ok(post),
            Err(e) if is_foreign_key_violation(&e) => Err(DbError::NotFound {
                resource: "user",
                id: user_id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
