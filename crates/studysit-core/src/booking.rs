use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Space type used when a booking button carries none.
pub const DEFAULT_SPACE_CATEGORY: &str = "General";

fn default_space_category() -> String {
    DEFAULT_SPACE_CATEGORY.to_string()
}

/// A booking form as submitted by the visitor.
///
/// Text fields default to empty so a sparse form still reaches the
/// validator and fails there instead of at load time. Unknown keys are
/// rejected so a misspelled field cannot silently fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BookingSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(
        default = "default_space_category",
        alias = "space-type",
        alias = "spaceType",
        alias = "spaceCategory"
    )]
    pub space_category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub duration: String,
    #[serde(default, alias = "special-requests", alias = "specialRequests")]
    pub notes: Option<String>,
}

impl BookingSubmission {
    /// Load a submission from a JSON or YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        crate::source::load_document(path, "submission")
    }

    /// Summary shown once the booking has been accepted.
    pub fn confirmation(&self) -> BookingConfirmation {
        BookingConfirmation::from(self)
    }
}

/// What the visitor is told after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub space: String,
    pub date: NaiveDate,
    pub duration: String,
    pub email: String,
}

impl From<&BookingSubmission> for BookingConfirmation {
    fn from(submission: &BookingSubmission) -> Self {
        Self {
            space: submission.space_category.clone(),
            date: submission.date,
            duration: submission.duration.clone(),
            email: submission.email.clone(),
        }
    }
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking Confirmed!")?;
        writeln!(f, "Space: {}", self.space)?;
        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "Duration: {}", self.duration)?;
        write!(f, "A confirmation email has been sent to {}", self.email)
    }
}
