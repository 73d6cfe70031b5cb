//! Contribution HTTP routes

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use super::server::AppState;
use crate::schema::{
    contribution_from_document, validate_contribution, ContributionOut, NewContribution,
};
use crate::store::CONTRIBUTION_COLLECTION;

/// Default listing cap when no `limit` is given
pub const DEFAULT_CONTRIBUTION_LIMIT: usize = 200;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ListContributionsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_CONTRIBUTION_LIMIT
}

/// Create contribution routes
pub fn contribution_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/contributions", post(create_contribution_handler))
        .route("/contributions", get(list_contributions_handler))
        .with_state(state)
}

async fn create_contribution_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewContribution>,
) -> ApiResult<Json<CreatedResponse>> {
    validate_contribution(&payload)?;

    // Schema validation already rejects this; kept as a handler-level
    // guard so the rule holds even if validation is bypassed.
    if payload.amount <= 0.0 {
        return Err(ApiError::NonPositiveAmount);
    }

    let id = state
        .store
        .create(CONTRIBUTION_COLLECTION, payload.into_document(Utc::now()))
        .await?;
    tracing::info!(%id, "contribution recorded");
    Ok(Json(CreatedResponse { id }))
}

async fn list_contributions_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListContributionsQuery>,
) -> ApiResult<Json<Vec<ContributionOut>>> {
    let documents = state
        .store
        .list(CONTRIBUTION_COLLECTION, Document::new())
        .await?;
    let mut contributions = documents
        .iter()
        .map(contribution_from_document)
        .collect::<Result<Vec<_>, _>>()?;
    contributions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    contributions.truncate(query.limit);
    Ok(Json(contributions))
}
