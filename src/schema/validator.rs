//! Payload validation
//!
//! Field constraints enforced before any store write:
//! - Campaign: `title`/`description` non-empty, `goal_amount` > 0,
//!   `max_supporters` (when present) > 0
//! - Contribution: `name` non-empty, `email` matches address syntax,
//!   `amount` > 0
//!
//! All failing fields are collected and reported together.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{FieldError, SchemaError, SchemaResult};
use super::types::{NewCampaign, NewContribution};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static pattern"))
}

/// Validates a campaign payload.
pub fn validate_campaign(payload: &NewCampaign) -> SchemaResult<()> {
    let mut errors = Vec::new();
    if payload.title.trim().is_empty() {
        errors.push(FieldError::new("title", "must not be empty"));
    }
    if payload.description.trim().is_empty() {
        errors.push(FieldError::new("description", "must not be empty"));
    }
    if !(payload.goal_amount > 0.0) {
        errors.push(FieldError::new("goal_amount", "must be greater than 0"));
    }
    if let Some(max_supporters) = payload.max_supporters {
        if max_supporters <= 0 {
            errors.push(FieldError::new("max_supporters", "must be greater than 0"));
        }
    }
    finish(errors)
}

/// Validates a contribution payload.
pub fn validate_contribution(payload: &NewContribution) -> SchemaResult<()> {
    let mut errors = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push(FieldError::new("name", "must not be empty"));
    }
    if !email_regex().is_match(&payload.email) {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }
    if !(payload.amount > 0.0) {
        errors.push(FieldError::new("amount", "must be greater than 0"));
    }
    finish(errors)
}

fn finish(errors: Vec<FieldError>) -> SchemaResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> NewCampaign {
        NewCampaign {
            title: "Community Garden".to_string(),
            description: "Raised beds for the neighborhood lot".to_string(),
            goal_amount: 1000.0,
            max_supporters: Some(100),
            deadline: None,
        }
    }

    fn contribution() -> NewContribution {
        NewContribution {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            amount: 25.0,
            message: None,
            is_public: true,
        }
    }

    #[test]
    fn test_valid_campaign_passes() {
        assert!(validate_campaign(&campaign()).is_ok());
    }

    #[test]
    fn test_campaign_zero_goal_rejected() {
        let mut payload = campaign();
        payload.goal_amount = 0.0;
        let err = validate_campaign(&payload).unwrap_err();
        match err {
            SchemaError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "goal_amount");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_campaign_negative_max_supporters_rejected() {
        let mut payload = campaign();
        payload.max_supporters = Some(-5);
        assert!(validate_campaign(&payload).is_err());
    }

    #[test]
    fn test_campaign_blank_title_and_goal_reported_together() {
        let mut payload = campaign();
        payload.title = "   ".to_string();
        payload.goal_amount = -1.0;
        match validate_campaign(&payload).unwrap_err() {
            SchemaError::Validation(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["title", "goal_amount"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_contribution_passes() {
        assert!(validate_contribution(&contribution()).is_ok());
    }

    #[test]
    fn test_contribution_bad_email_rejected() {
        for email in ["not-an-email", "a@b", "a b@c.com", "@example.com", ""] {
            let mut payload = contribution();
            payload.email = email.to_string();
            assert!(
                validate_contribution(&payload).is_err(),
                "accepted: {email:?}"
            );
        }
    }

    #[test]
    fn test_contribution_non_positive_amount_rejected() {
        for amount in [0.0, -1.0, f64::NAN] {
            let mut payload = contribution();
            payload.amount = amount;
            assert!(validate_contribution(&payload).is_err());
        }
    }
}
