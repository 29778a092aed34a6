//! Pure conversions between editable form fields and API payloads.
//!
//! Nothing here touches the network, so everything a screen submits can be
//! checked in isolation.

pub mod inquiry_form;
pub mod property_form;

pub use inquiry_form::InquiryForm;
pub use property_form::PropertyForm;

use thiserror::Error;

/// Client-side rejection of a form, raised before any request is made
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a non-negative whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("at least one image URL is required")]
    NoImages,
}

/// Split a delimited field into trimmed, non-empty entries, keeping order
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing { field })
    } else {
        Ok(value)
    }
}
