use crate::booking::BookingSubmission;
use crate::error::ValidationError;
use crate::rules::FieldRule;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld with no whitespace and a single '@'; not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Minimal structural email check shared by booking and newsletter forms.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub struct EmailFormatRule;

impl FieldRule for EmailFormatRule {
    fn rule_id(&self) -> &'static str {
        "email_format"
    }

    fn field(&self) -> &'static str {
        "email"
    }

    fn check(&self, submission: &BookingSubmission, _today: NaiveDate) -> Option<ValidationError> {
        if is_valid_email(&submission.email) {
            None
        } else {
            Some(ValidationError::InvalidEmail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_created() {
        let rule = EmailFormatRule;
        assert_eq!(rule.rule_id(), "email_format");
    }

    #[test]
    fn accepts_common_shapes() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("first.last+desk@mail.example.co.in"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "bad",
            "asha@",
            "@example.com",
            "asha@example",
            "asha@@example.com",
            "asha @example.com",
            "asha@exa mple.com",
            "asha@example.",
            " asha@example.com",
        ] {
            assert!(!is_valid_email(bad), "{:?} should be rejected", bad);
        }
    }
}
