//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

/// State handed to every route handler.
///
/// Holds the connection pool behind an `Arc` so cloning per request
/// stays cheap. Repositories borrow the pool through [`AppState::pool`];
/// handlers never own a connection themselves.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    /// Pool for constructing a repository, e.g. `UserRepo::new(state.pool())`.
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}
