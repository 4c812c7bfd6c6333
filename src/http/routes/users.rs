//! User endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::models::{Username, ValidationError};
use crate::state::AppState;

/// Create user request
///
/// `username` is an Option so a missing field maps to a 400 validation
/// error instead of a body-deserialization rejection.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// User response
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
        }
    }
}

/// GET /users - list all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(state.pool()).list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users - create a new user
async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let raw = req
        .username
        .ok_or(ValidationError::Missing { field: "username" })?;
    let username = Username::new(&raw)?;

    let user = UserRepo::new(state.pool()).create(username).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user))
}
