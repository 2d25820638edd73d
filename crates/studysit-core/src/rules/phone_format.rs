use crate::booking::BookingSubmission;
use crate::error::ValidationError;
use crate::rules::FieldRule;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// Optional '+', leading 1-9, then 9 to 14 more ASCII digits. Separators are not allowed.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{9,14}$").expect("phone pattern is valid"));

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub struct PhoneFormatRule;

impl FieldRule for PhoneFormatRule {
    fn rule_id(&self) -> &'static str {
        "phone_format"
    }

    fn field(&self) -> &'static str {
        "phone"
    }

    fn check(&self, submission: &BookingSubmission, _today: NaiveDate) -> Option<ValidationError> {
        if is_valid_phone(&submission.phone) {
            None
        } else {
            Some(ValidationError::InvalidPhone)
        }
    }
}
