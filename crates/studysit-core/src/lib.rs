pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod newsletter;
pub mod rules;
pub mod source;
pub mod validator;

pub use booking::{BookingConfirmation, BookingSubmission};
pub use catalog::{
    filter_catalog, filter_indices, Catalog, CatalogItem, CategoryFilter, FilterQuery,
};
pub use config::StudySitConfig;
pub use error::ValidationError;
pub use newsletter::validate_newsletter_email;
pub use rules::FieldRule;
pub use validator::{validate_booking, ValidationResult, Validator};
