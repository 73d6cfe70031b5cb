//! Campaign and contribution schemas
//!
//! Defines the two record types handled by the API, their field-level
//! constraints, and the typed conversion from raw store documents to
//! response views.
//!
//! # Design Principles
//!
//! - Payloads are validated before any store write
//! - Validation failures carry field-level detail
//! - Store documents are loosely typed; conversion to views is explicit
//!   and coerces stored integers to floats where the API exposes floats
//! - Shared defaults (`max_supporters`, fallback goal) live here, once

mod errors;
mod record;
mod types;
mod validator;

pub use errors::{FieldError, SchemaError, SchemaResult};
pub use record::{bson_f64, bson_i64, campaign_from_document, contribution_from_document};
pub use types::{
    CampaignOut, ContributionOut, NewCampaign, NewContribution, DEFAULT_GOAL_AMOUNT,
    DEFAULT_MAX_SUPPORTERS,
};
pub use validator::{validate_campaign, validate_contribution};
