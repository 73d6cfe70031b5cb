//! Application configuration
//!
//! All settings come from the process environment at startup:
//! `DATABASE_URL`, `DATABASE_NAME`, `HOST` and `PORT`.

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Document store connection string
    pub database_url: String,

    /// Database name within the store
    pub database_name: String,

    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 8000)
    pub port: u16,

    /// Whether `DATABASE_URL` was present in the environment.
    /// Reported by the diagnostics endpoint without exposing the value.
    pub database_url_set: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "mongodb://localhost:27017".to_string(),
            database_name: "crowdfund".to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_url_set: false,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let database_url = lookup("DATABASE_URL");

        Self {
            database_url_set: database_url.is_some(),
            database_url: database_url.unwrap_or(defaults.database_url),
            database_name: lookup("DATABASE_NAME").unwrap_or(defaults.database_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
