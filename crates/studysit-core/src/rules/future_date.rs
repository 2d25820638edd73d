use crate::booking::BookingSubmission;
use crate::error::ValidationError;
use crate::rules::FieldRule;
use chrono::NaiveDate;

/// Rejects bookings for days strictly before `today`. Same-day bookings pass.
pub struct FutureDateRule;

impl FieldRule for FutureDateRule {
    fn rule_id(&self) -> &'static str {
        "future_date"
    }

    fn field(&self) -> &'static str {
        "date"
    }

    fn check(&self, submission: &BookingSubmission, today: NaiveDate) -> Option<ValidationError> {
        if submission.date < today {
            Some(ValidationError::PastDate)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::sample_submission;

    fn check_on(date: NaiveDate, today: NaiveDate) -> Option<ValidationError> {
        let mut submission = sample_submission();
        submission.date = date;
        FutureDateRule.check(&submission, today)
    }

    #[test]
    fn same_day_and_future_pass() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(check_on(today, today), None);
        assert_eq!(check_on(today.succ_opt().unwrap(), today), None);
    }

    #[test]
    fn yesterday_fails() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let yesterday = today.pred_opt().unwrap();
        assert_eq!(check_on(yesterday, today), Some(ValidationError::PastDate));
    }
}
