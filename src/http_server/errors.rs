//! HTTP API errors
//!
//! Maps the error taxonomy to statuses:
//! - business-rule violations (duplicate campaign, non-positive amount) -> 400
//! - payload validation failures -> 422 with per-field detail
//! - store failures and malformed stored documents -> 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldError, SchemaError};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Single-campaign rule violated
    #[error("A campaign already exists")]
    CampaignExists,

    /// Handler-level re-check of the contribution amount
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Schema validation or stored-document conversion failure
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// Store unreachable or operation failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CampaignExists | ApiError::NonPositiveAmount => StatusCode::BAD_REQUEST,
            ApiError::Schema(SchemaError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Schema(SchemaError::Malformed { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<Vec<FieldError>> {
        match self {
            ApiError::Schema(SchemaError::Validation(errors)) => Some(errors.clone()),
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            details: err.details(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
