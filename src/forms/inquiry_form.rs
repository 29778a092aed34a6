use crate::forms::{require, ValidationError};
use crate::models::NewInquiry;

/// Visitor contact fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl InquiryForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the request body, optionally linked to the listing asked about
    pub fn to_payload(
        &self,
        property_id: Option<&str>,
        property_title: Option<&str>,
    ) -> Result<NewInquiry, ValidationError> {
        let name = require("name", &self.name)?;
        let email = require("email", &self.email)?.trim();
        let message = require("message", &self.message)?;

        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        let phone = self.phone.trim();

        Ok(NewInquiry {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: message.to_string(),
            property_id: property_id.map(str::to_string),
            property_title: property_title.map(str::to_string),
        })
    }
}

/// Same bar as a browser `type=email` input: something on each side of one `@`
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
