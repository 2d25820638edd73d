use serde::Serialize;
use thiserror::Error;

/// Reasons a booking submission is rejected.
///
/// These are expected outcomes of user input, not faults: the validator
/// collects them and hands them back rather than failing. `Display` yields
/// the message shown to the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ValidationError {
    #[error("Name must be at least {min} characters long")]
    NameTooShort { min: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please select a future date")]
    PastDate,
}

impl ValidationError {
    /// Stable short code, independent of the rendered message.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NameTooShort { .. } => "NameTooShort",
            ValidationError::InvalidEmail => "InvalidEmail",
            ValidationError::InvalidPhone => "InvalidPhone",
            ValidationError::PastDate => "PastDate",
        }
    }
}
