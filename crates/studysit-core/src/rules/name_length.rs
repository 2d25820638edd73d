use crate::booking::BookingSubmission;
use crate::error::ValidationError;
use crate::rules::FieldRule;
use chrono::NaiveDate;

pub const DEFAULT_MIN_NAME_LENGTH: usize = 2;

pub struct NameLengthRule {
    min_len: usize,
}

impl NameLengthRule {
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }
}

impl Default for NameLengthRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_NAME_LENGTH)
    }
}

impl FieldRule for NameLengthRule {
    fn rule_id(&self) -> &'static str {
        "name_length"
    }

    fn field(&self) -> &'static str {
        "name"
    }

    fn check(&self, submission: &BookingSubmission, _today: NaiveDate) -> Option<ValidationError> {
        // Counted in characters, not bytes.
        if submission.name.trim().chars().count() < self.min_len {
            return Some(ValidationError::NameTooShort { min: self.min_len });
        }
        None
    }
}
