//! HTTP API
//!
//! Axum routers for the crowdfunding endpoints, combined into a single
//! server with permissive CORS.
//!
//! # Endpoints
//!
//! - `GET /` - liveness message
//! - `GET /test` - store diagnostics (never fails hard)
//! - `POST /api/campaigns` / `GET /api/campaigns`
//! - `POST /api/contributions` / `GET /api/contributions?limit=N`
//! - `GET /api/summary` - aggregate fundraising figures

pub mod campaign_routes;
pub mod contribution_routes;
pub mod diagnostics_routes;
pub mod errors;
pub mod server;
pub mod summary_routes;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, AppState, HttpServer};
