use crate::booking::BookingSubmission;
use crate::config::ValidationOptions;
use crate::error::ValidationError;
use crate::rules::{EmailFormatRule, FieldRule, FutureDateRule, NameLengthRule, PhoneFormatRule};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

static DEFAULT_VALIDATOR: Lazy<Validator> = Lazy::new(Validator::with_default_rules);

/// Outcome of validating one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Failures in rule order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Human-readable messages, one per failure.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Runs every booking field rule and collects all failures
pub struct Validator {
    rules: Vec<Box<dyn FieldRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::with_default_rules()
    }

    /// Name, email, phone, date; this order is the order errors are reported in.
    pub fn with_default_rules() -> Self {
        Self::from_options(&ValidationOptions::default())
    }

    /// Create validator with specific rules
    pub fn with_rules(rules: Vec<Box<dyn FieldRule>>) -> Self {
        Self { rules }
    }

    /// Default rule order, with the configured name length and disabled rules dropped
    pub fn from_options(options: &ValidationOptions) -> Self {
        let candidates: Vec<Box<dyn FieldRule>> = vec![
            Box::new(NameLengthRule::new(options.min_name_length)),
            Box::new(EmailFormatRule),
            Box::new(PhoneFormatRule),
            Box::new(FutureDateRule),
        ];
        let rules = candidates
            .into_iter()
            .filter(|rule| options.is_rule_enabled(rule.rule_id()))
            .collect();
        Self { rules }
    }

    pub fn validate(&self, submission: &BookingSubmission, today: NaiveDate) -> ValidationResult {
        let errors: Vec<ValidationError> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let outcome = rule.check(submission, today);
                if let Some(err) = &outcome {
                    debug!("Rule {} failed on field {}: {}", rule.rule_id(), rule.field(), err);
                }
                outcome
            })
            .collect();

        debug!(
            "Validated booking for {} against {} rules: {} error(s)",
            submission.space_category,
            self.rules.len(),
            errors.len()
        );
        ValidationResult::from_errors(errors)
    }

    /// Get list of all rules as (rule id, field) in check order
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .map(|rule| (rule.rule_id(), rule.field()))
            .collect()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a booking with the default rule set.
pub fn validate_booking(submission: &BookingSubmission, today: NaiveDate) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(submission, today)
}
