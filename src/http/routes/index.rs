//! Index route, a simple sanity check

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Index response
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
}

/// GET /
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the axum + sqlx assignment",
    })
}

/// Index routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_returns_welcome() {
        let Json(body) = index().await;
        assert_eq!(body.message, "Welcome to the axum + sqlx assignment");
    }
}
