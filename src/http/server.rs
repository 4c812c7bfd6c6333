//! Server assembly and lifecycle
//!
//! Router construction is separate from serving so tests can drive
//! the router directly without binding a socket.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::AppConfig;
use crate::db;
use crate::state::AppState;

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application router with all routes.
///
/// This is the application factory: tests call it with their own state
/// to get an isolated instance.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::index::router())
        .merge(routes::health::router())
        .merge(routes::users::router())
        .merge(routes::posts::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server.
///
/// Builds the pool, runs migrations so the schema exists before any
/// request is handled, then serves until shutdown.
pub async fn serve(config: AppConfig) -> Result<(), ServeError> {
    let pool =
        db::create_pool_with_options(&config.database_url, config.max_connections).await?;

    db::migrations::run(&pool).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
