//! Screen state holders. Each one owns the data it fetched for as long as it
//! lives; nothing is shared between screens except the API client and the
//! notifier.

pub mod admin;
pub mod catalog;
pub mod detail;
pub mod inquiry;

pub use admin::{AdminPanel, Confirm, Modal, Tab};
pub use catalog::{CatalogState, CatalogView, HomeView};
pub use detail::{DetailState, DetailView, Gallery};
pub use inquiry::InquiryFormView;

use crate::error::ApiError;
use crate::forms::ValidationError;

/// How a user action ended. Failures have already been logged and
/// surfaced as a toast by the time the caller sees them.
#[derive(Debug)]
pub enum Outcome<T = ()> {
    Done(T),
    /// Declined confirmation, or nothing to act on
    Cancelled,
    /// Blocked client-side; no request was sent
    Rejected(ValidationError),
    Failed(ApiError),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Done(v) => Outcome::Done(f(v)),
            Outcome::Cancelled => Outcome::Cancelled,
            Outcome::Rejected(e) => Outcome::Rejected(e),
            Outcome::Failed(e) => Outcome::Failed(e),
        }
    }
}
