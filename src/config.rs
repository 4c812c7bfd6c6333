//! Server configuration

/// Server configuration
///
/// Fields are public so tests can override them directly, the same way
/// the app factory takes overrides for an isolated test instance.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/microblog".to_string()),
            max_connections: 5,
        }
    }
}

impl AppConfig {
    /// Address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
