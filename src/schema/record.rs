//! Typed conversion from store documents to response views
//!
//! The store hands back loosely typed BSON documents; this is the one
//! place where they are checked and shaped into `CampaignOut` /
//! `ContributionOut`. Numeric fields exposed as floats accept stored
//! int32/int64 values, since documents written by other clients may
//! carry integers.

use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document};

use super::errors::{SchemaError, SchemaResult};
use super::types::{CampaignOut, ContributionOut};

/// Converts a stored campaign document to its response view.
pub fn campaign_from_document(document: &Document) -> SchemaResult<CampaignOut> {
    Ok(CampaignOut {
        id: require_id(document)?,
        title: require_str(document, "title")?,
        description: require_str(document, "description")?,
        goal_amount: require_f64(document, "goal_amount")?,
        max_supporters: optional_i64(document, "max_supporters")?,
        deadline: optional_datetime(document, "deadline")?,
        created_at: require_datetime(document, "created_at")?,
    })
}

/// Converts a stored contribution document to its response view.
/// A missing `is_public` reads as `true`.
pub fn contribution_from_document(document: &Document) -> SchemaResult<ContributionOut> {
    Ok(ContributionOut {
        id: require_id(document)?,
        name: require_str(document, "name")?,
        email: require_str(document, "email")?,
        amount: require_f64(document, "amount")?,
        message: optional_str(document, "message")?,
        is_public: bool_or(document, "is_public", true),
        created_at: require_datetime(document, "created_at")?,
    })
}

/// Numeric coercion for float-valued API fields.
pub fn bson_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}

/// Integer extraction for int-valued API fields.
pub fn bson_i64(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        _ => None,
    }
}

fn malformed(field: &str, detail: impl Into<String>) -> SchemaError {
    SchemaError::Malformed {
        field: field.to_string(),
        detail: detail.into(),
    }
}

fn require_id(document: &Document) -> SchemaResult<String> {
    match document.get("_id") {
        Some(Bson::ObjectId(oid)) => Ok(oid.to_hex()),
        Some(Bson::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(malformed("_id", "missing")),
    }
}

fn require_str(document: &Document, field: &str) -> SchemaResult<String> {
    match document.get(field) {
        Some(Bson::String(s)) => Ok(s.clone()),
        Some(other) => Err(malformed(
            field,
            format!("expected string, found {:?}", other.element_type()),
        )),
        None => Err(malformed(field, "missing")),
    }
}

fn optional_str(document: &Document, field: &str) -> SchemaResult<Option<String>> {
    match document.get(field) {
        Some(Bson::String(s)) => Ok(Some(s.clone())),
        Some(Bson::Null) | None => Ok(None),
        Some(other) => Err(malformed(
            field,
            format!("expected string, found {:?}", other.element_type()),
        )),
    }
}

fn require_f64(document: &Document, field: &str) -> SchemaResult<f64> {
    match document.get(field) {
        Some(value) => {
            bson_f64(value).ok_or_else(|| {
                malformed(
                    field,
                    format!("expected number, found {:?}", value.element_type()),
                )
            })
        }
        None => Err(malformed(field, "missing")),
    }
}

fn optional_i64(document: &Document, field: &str) -> SchemaResult<Option<i64>> {
    match document.get(field) {
        Some(Bson::Null) | None => Ok(None),
        Some(value) => {
            bson_i64(value)
                .map(Some)
                .ok_or_else(|| {
                    malformed(
                        field,
                        format!("expected integer, found {:?}", value.element_type()),
                    )
                })
        }
    }
}

fn require_datetime(document: &Document, field: &str) -> SchemaResult<DateTime<Utc>> {
    match document.get(field) {
        Some(Bson::DateTime(dt)) => Ok(dt.to_chrono()),
        Some(other) => Err(malformed(
            field,
            format!("expected datetime, found {:?}", other.element_type()),
        )),
        None => Err(malformed(field, "missing")),
    }
}

fn optional_datetime(document: &Document, field: &str) -> SchemaResult<Option<DateTime<Utc>>> {
    match document.get(field) {
        Some(Bson::DateTime(dt)) => Ok(Some(dt.to_chrono())),
        Some(Bson::Null) | None => Ok(None),
        Some(other) => Err(malformed(
            field,
            format!("expected datetime, found {:?}", other.element_type()),
        )),
    }
}

fn bool_or(document: &Document, field: &str, default: bool) -> bool {
    match document.get(field) {
        Some(Bson::Boolean(b)) => *b,
        _ => default,
    }
}
