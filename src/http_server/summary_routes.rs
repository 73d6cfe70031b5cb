//! Summary HTTP route
//!
//! Aggregates over the raw documents rather than the typed views so a
//! partially malformed contribution degrades to zero instead of
//! failing the whole summary.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mongodb::bson::Document;
use serde::Serialize;

use super::errors::ApiResult;
use super::server::AppState;
use crate::schema::{bson_f64, bson_i64, DEFAULT_GOAL_AMOUNT, DEFAULT_MAX_SUPPORTERS};
use crate::store::{CAMPAIGN_COLLECTION, CONTRIBUTION_COLLECTION};

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub goal: f64,
    pub raised: f64,
    pub backers: i64,
    pub percent: f64,
    pub remaining_supporters: i64,
}

/// Create summary routes
pub fn summary_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/summary", get(summary_handler))
        .with_state(state)
}

async fn summary_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<SummaryResponse>> {
    let campaigns = state
        .store
        .list(CAMPAIGN_COLLECTION, Document::new())
        .await?;
    let (goal, max_supporters) = match campaigns.first() {
        Some(campaign) => (
            campaign
                .get("goal_amount")
                .and_then(bson_f64)
                .unwrap_or(DEFAULT_GOAL_AMOUNT),
            campaign
                .get("max_supporters")
                .and_then(bson_i64)
                .unwrap_or(DEFAULT_MAX_SUPPORTERS),
        ),
        None => (DEFAULT_GOAL_AMOUNT, DEFAULT_MAX_SUPPORTERS),
    };

    let contributions = state
        .store
        .list(CONTRIBUTION_COLLECTION, Document::new())
        .await?;
    let raised: f64 = contributions
        .iter()
        .map(|document| document.get("amount").and_then(bson_f64).unwrap_or(0.0))
        .sum();
    let backers = contributions.len() as i64;

    let percent = if goal > 0.0 {
        round2(raised / goal * 100.0)
    } else {
        0.0
    };

    Ok(Json(SummaryResponse {
        goal,
        raised,
        backers,
        percent,
        remaining_supporters: (max_supporters - backers).max(0),
    }))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
