use crate::api::types::PropertyFilter;
use crate::error::ApiError;
use crate::models::{Inquiry, NewInquiry, NewProperty, Property};
use async_trait::async_trait;

/// Operations the listing backend exposes.
/// Every screen talks through this trait so it can run against the HTTP
/// client or an in-memory stand-in.
#[async_trait]
pub trait EstateApi: Send + Sync {
    /// `GET /api/properties` with the filter as query string
    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ApiError>;

    /// `GET /api/properties/{id}`; a 404 surfaces as `ApiError::NotFound`
    async fn get_property(&self, id: &str) -> Result<Property, ApiError>;

    async fn create_property(&self, property: &NewProperty) -> Result<Property, ApiError>;

    /// Full-record replace
    async fn update_property(&self, id: &str, property: &NewProperty) -> Result<Property, ApiError>;

    /// Deleting an already-missing record is not an error
    async fn delete_property(&self, id: &str) -> Result<(), ApiError>;

    /// Newest first
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, ApiError>;

    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiError>;

    async fn delete_inquiry(&self, id: &str) -> Result<(), ApiError>;

    /// `POST /api/seed`, returns the backend's status message
    async fn seed(&self) -> Result<String, ApiError>;

    /// Where requests go, for log lines
    fn base_url(&self) -> &str;
}
