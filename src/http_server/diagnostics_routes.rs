//! Diagnostics HTTP routes
//!
//! `GET /` is a static liveness message. `GET /test` probes the store
//! and reports its state; by design it always answers 200, capturing
//! store failures as status text instead of propagating them.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::server::AppState;

/// Most collection names the diagnostics report will list
const MAX_DIAGNOSTIC_COLLECTIONS: usize = 10;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    /// "set"/"not set"; the connection string itself is never exposed
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Create diagnostics routes
pub fn diagnostics_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/test", get(test_database_handler))
        .with_state(state)
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Crowdfunding API is running".to_string(),
    })
}

async fn test_database_handler(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let database_url = if state.database_url_set {
        "set"
    } else {
        "not set"
    };
    let mut report = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: database_url.to_string(),
        database_name: None,
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.ping().await {
        Ok(()) => {
            report.connection_status = "connected".to_string();
            report.database_name = Some(state.store.database_name().to_string());
            match state.store.collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_DIAGNOSTIC_COLLECTIONS);
                    report.collections = names;
                    report.database = "connected & working".to_string();
                }
                Err(e) => {
                    report.database = format!("reachable but listing failed: {e}");
                }
            }
        }
        Err(e) => {
            report.database = format!("unreachable: {e}");
        }
    }

    Json(report)
}
