//! HTTP server
//!
//! Combines the endpoint routers, applies CORS and request tracing, and
//! binds the listener. The store client is injected through `AppState`
//! rather than held as global state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::campaign_routes::campaign_routes;
use super::contribution_routes::contribution_routes;
use super::diagnostics_routes::diagnostics_routes;
use super::summary_routes::summary_routes;
use crate::config::AppConfig;
use crate::store::DocumentStore;

/// State shared across all handlers
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    /// Whether `DATABASE_URL` was present in the environment (diagnostics)
    pub database_url_set: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            database_url_set: false,
        }
    }
}

/// Build the combined router with all endpoints.
pub fn build_router(state: Arc<AppState>) -> Router {
    // All origins, methods and headers are allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(diagnostics_routes(state.clone()))
        .nest(
            "/api",
            campaign_routes(state.clone())
                .merge(contribution_routes(state.clone()))
                .merge(summary_routes(state)),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the crowdfunding API
pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around the given configuration and store.
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        let state = Arc::new(AppState {
            store,
            database_url_set: config.database_url_set,
        });
        let router = build_router(state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "crowdfund backend listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
