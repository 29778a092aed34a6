use crate::api::EstateApi;
use crate::forms::InquiryForm;
use crate::models::{Inquiry, Property};
use crate::notify::Notifier;
use crate::views::Outcome;
use std::sync::Arc;
use tracing::{debug, error};

/// Contact form, either general or about one listing
pub struct InquiryFormView {
    api: Arc<dyn EstateApi>,
    notifier: Arc<Notifier>,
    pub form: InquiryForm,
    property_id: Option<String>,
    property_title: Option<String>,
    submitting: bool,
}

impl InquiryFormView {
    /// Contact page form, not tied to a listing
    pub fn standalone(api: Arc<dyn EstateApi>, notifier: Arc<Notifier>) -> Self {
        Self {
            api,
            notifier,
            form: InquiryForm::default(),
            property_id: None,
            property_title: None,
            submitting: false,
        }
    }

    pub fn for_property(api: Arc<dyn EstateApi>, notifier: Arc<Notifier>, property: &Property) -> Self {
        Self {
            property_id: Some(property.id.clone()),
            property_title: Some(property.title.clone()),
            ..Self::standalone(api, notifier)
        }
    }

    pub fn property_id(&self) -> Option<&str> {
        self.property_id.as_deref()
    }

    /// False while a submission is in flight
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    /// Validate, then send. The form is cleared only on success; on failure
    /// the entered values stay for another attempt.
    pub async fn submit(&mut self) -> Outcome<Inquiry> {
        if self.submitting {
            return Outcome::Cancelled;
        }

        let payload = match self
            .form
            .to_payload(self.property_id.as_deref(), self.property_title.as_deref())
        {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Inquiry rejected: {}", e);
                return Outcome::Rejected(e);
            }
        };

        let api = self.api.clone();
        let in_flight = InFlight::start(&mut self.submitting);
        let result = api.create_inquiry(&payload).await;
        drop(in_flight);

        match result {
            Ok(inquiry) => {
                self.notifier
                    .success("Your inquiry has been received. We will be in touch shortly.");
                self.form.clear();
                Outcome::Done(inquiry)
            }
            Err(e) => {
                error!("Error submitting inquiry: {}", e);
                self.notifier.error("Unable to submit inquiry. Please try again.");
                Outcome::Failed(e)
            }
        }
    }
}

/// Holds the submitting flag up for one request. Dropping it clears the
/// flag, including when the submit future itself is dropped mid-request.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
