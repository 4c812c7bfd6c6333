//! microblog: a users/posts JSON API teaching scaffold
//!
//! An application factory builds the router over a PostgreSQL pool and
//! exposes index, users, and posts routes. Migrations run at startup.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::AppConfig;
pub use http::{build_router, serve, ApiError};
pub use state::AppState;
