//! microblog server entry point

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use microblog::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "microblog",
    version,
    about = "Users/posts JSON API teaching scaffold built on axum and sqlx"
)]
struct Cli {
    /// Host to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging (overridable via RUST_LOG)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let defaults = AppConfig::default();
    let config = AppConfig {
        host: cli.host,
        port: cli.port,
        database_url: cli.database_url.unwrap_or(defaults.database_url),
        max_connections: defaults.max_connections,
    };

    microblog::serve(config).await?;
    Ok(())
}
