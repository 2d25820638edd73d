use crate::error::ValidationError;
use crate::rules::is_valid_email;
use tracing::info;

pub const SUBSCRIBE_SUCCESS: &str = "Thank you for subscribing to our newsletter!";

/// Check a newsletter signup address with the same rule the booking form uses.
pub fn validate_newsletter_email(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    info!("Newsletter signup accepted");
    Ok(())
}
