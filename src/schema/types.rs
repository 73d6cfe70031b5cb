//! Payload and view types for the two collections
//!
//! `New*` types deserialize inbound request bodies; `*Out` types are the
//! response shapes. The stored representation in between is a plain BSON
//! document built by `into_document`.

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use serde::{Deserialize, Serialize};

/// Default cap on supporters when a campaign does not specify one.
/// Shared by the payload default and the summary computation.
pub const DEFAULT_MAX_SUPPORTERS: i64 = 100;

/// Fallback fundraising goal used by the summary when no campaign exists.
pub const DEFAULT_GOAL_AMOUNT: f64 = 100_000.0;

/// Inbound campaign payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    pub goal_amount: f64,
    #[serde(default = "default_max_supporters")]
    pub max_supporters: Option<i64>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

fn default_max_supporters() -> Option<i64> {
    Some(DEFAULT_MAX_SUPPORTERS)
}

impl NewCampaign {
    /// Build the stored document, stamping the creation time.
    pub fn into_document(self, created_at: DateTime<Utc>) -> Document {
        let mut document = doc! {
            "title": self.title,
            "description": self.description,
            "goal_amount": self.goal_amount,
            "created_at": BsonDateTime::from_chrono(created_at),
        };
        if let Some(max_supporters) = self.max_supporters {
            document.insert("max_supporters", max_supporters);
        }
        if let Some(deadline) = self.deadline {
            document.insert("deadline", BsonDateTime::from_chrono(deadline));
        }
        document
    }
}

/// Inbound contribution payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewContribution {
    pub name: String,
    pub email: String,
    pub amount: f64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
}

fn default_is_public() -> bool {
    true
}

impl NewContribution {
    /// Build the stored document, stamping the creation time.
    pub fn into_document(self, created_at: DateTime<Utc>) -> Document {
        let mut document = doc! {
            "name": self.name,
            "email": self.email,
            "amount": self.amount,
            "is_public": self.is_public,
            "created_at": BsonDateTime::from_chrono(created_at),
        };
        if let Some(message) = self.message {
            document.insert("message", message);
        }
        document
    }
}

/// Campaign response view
#[derive(Debug, Clone, Serialize)]
pub struct CampaignOut {
    pub id: String,
    pub title: String,
    pub description: String,
    pub goal_amount: f64,
    pub max_supporters: Option<i64>,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Contribution response view
#[derive(Debug, Clone, Serialize)]
pub struct ContributionOut {
    pub id: String,
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub message: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}
