//! Post endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Post, PostRepo, PostWithAuthor, UserRepo};
use crate::http::error::ApiError;
use crate::models::{PostContent, PostTitle, ValidationError};
use crate::state::AppState;

/// Create post request
///
/// Fields are Options so missing fields map to 400 validation errors.
#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

/// Nested author info in a post listing
#[derive(Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub username: String,
}

/// Post response
///
/// The author is included when listing but omitted from the create
/// response, which echoes only the inserted row.
#[derive(Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            user_id: p.user_id,
            author: None,
        }
    }
}

impl From<PostWithAuthor> for PostResponse {
    fn from(p: PostWithAuthor) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            user_id: p.user_id,
            author: Some(AuthorResponse {
                id: p.author.id,
                username: p.author.username,
            }),
        }
    }
}

/// GET /posts - list all posts with nested author info
async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = PostRepo::new(state.pool()).list().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// POST /posts - create a post tied to an existing user
async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let title = req
        .title
        .ok_or(ValidationError::Missing { field: "title" })?;
    let content = req
        .content
        .ok_or(ValidationError::Missing { field: "content" })?;
    let user_id = req
        .user_id
        .ok_or(ValidationError::Missing { field: "user_id" })?;

    let title = PostTitle::new(&title)?;
    let content = PostContent::new(&content)?;

    // Resolve the author first so an unknown user is a 404, not an
    // insert failure.
    let author = UserRepo::new(state.pool()).get(user_id).await?;

    let post = PostRepo::new(state.pool())
        .create(title, content, author.id)
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new().route("/posts", get(list_posts).post(create_post))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_omits_author() {
        let post = Post {
            id: 1,
            title: "Hello".into(),
            content: "First post".into(),
            user_id: 7,
        };
        let body = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert!(body.get("author").is_none());
        assert_eq!(body["user_id"], 7);
    }

    #[test]
    fn list_response_nests_author() {
        let post = PostWithAuthor {
            id: 1,
            title: "Hello".into(),
            content: "First post".into(),
            user_id: 7,
            author: crate::db::repos::PostAuthor {
                id: 7,
                username: "alice".into(),
            },
        };
        let body = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(body["author"]["id"], 7);
        assert_eq!(body["author"]["username"], "alice");
    }
}
