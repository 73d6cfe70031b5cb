//! Campaign HTTP routes

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use mongodb::bson::Document;
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use super::server::AppState;
use crate::schema::{campaign_from_document, validate_campaign, CampaignOut, NewCampaign};
use crate::store::CAMPAIGN_COLLECTION;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Create campaign routes
pub fn campaign_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/campaigns", post(create_campaign_handler))
        .route("/campaigns", get(list_campaigns_handler))
        .with_state(state)
}

async fn create_campaign_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCampaign>,
) -> ApiResult<Json<CreatedResponse>> {
    validate_campaign(&payload)?;

    // Only one campaign may exist. Check-then-insert: two concurrent
    // creates can both pass this check (see DESIGN.md).
    let existing = state
        .store
        .list(CAMPAIGN_COLLECTION, Document::new())
        .await?;
    if !existing.is_empty() {
        return Err(ApiError::CampaignExists);
    }

    let id = state
        .store
        .create(CAMPAIGN_COLLECTION, payload.into_document(Utc::now()))
        .await?;
    tracing::info!(%id, "campaign created");
    Ok(Json(CreatedResponse { id }))
}

async fn list_campaigns_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CampaignOut>>> {
    let documents = state
        .store
        .list(CAMPAIGN_COLLECTION, Document::new())
        .await?;
    let mut campaigns = documents
        .iter()
        .map(campaign_from_document)
        .collect::<Result<Vec<_>, _>>()?;
    campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(campaigns))
}
