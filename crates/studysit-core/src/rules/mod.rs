use crate::booking::BookingSubmission;
use crate::error::ValidationError;
use chrono::NaiveDate;

pub mod email_format;
pub mod future_date;
pub mod name_length;
pub mod phone_format;

pub use email_format::{is_valid_email, EmailFormatRule};
pub use future_date::FutureDateRule;
pub use name_length::NameLengthRule;
pub use phone_format::{is_valid_phone, PhoneFormatRule};

/// Trait that all booking field checks implement
pub trait FieldRule: Send + Sync {
    /// Unique identifier for this rule
    fn rule_id(&self) -> &'static str;

    /// Form field the rule inspects
    fn field(&self) -> &'static str;

    /// Run the check; `today` is the reference date for date rules
    fn check(&self, submission: &BookingSubmission, today: NaiveDate) -> Option<ValidationError>;
}

#[cfg(test)]
pub(crate) fn sample_submission() -> BookingSubmission {
    BookingSubmission {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        space_category: "Silent Zone".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
        duration: "2 hours".to_string(),
        notes: None,
    }
}
