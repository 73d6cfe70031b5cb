//! Server entry point
//!
//! This is a minimal entrypoint that:
//! 1. Initializes logging
//! 2. Reads configuration from the environment
//! 3. Builds the store client and starts the HTTP server
//! 4. Exits non-zero on failure

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crowdfund_backend::config::AppConfig;
use crowdfund_backend::http_server::HttpServer;
use crowdfund_backend::store::MongoStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    // The client is lazy: an unreachable database surfaces per request and in
    // the /test diagnostics, not here. Only a malformed URL fails at startup.
    let store = match MongoStore::connect(&config).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("invalid store configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = HttpServer::new(config, store).start().await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
