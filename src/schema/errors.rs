//! Schema error types
//!
//! Two failure classes:
//! - `Validation`: a client payload broke a field constraint (rejected
//!   before any store write, reported with per-field detail)
//! - `Malformed`: a stored document could not be converted to a view

use serde::Serialize;
use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the payload
    pub field: String,
    /// Human-readable constraint description
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Schema errors
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// Payload failed one or more field constraints
    #[error("invalid payload: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// Stored document does not match the expected shape
    #[error("malformed stored document: {field}: {detail}")]
    Malformed { field: String, detail: String },
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
