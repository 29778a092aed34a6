use crate::api::traits::EstateApi;
use crate::api::types::PropertyFilter;
use crate::error::ApiError;
use crate::models::{Inquiry, NewInquiry, NewProperty, Property, StatusMessage};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

/// reqwest-backed client for the listing backend
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for the backend at `base_url` (without the `/api` suffix)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("quiet-wealth/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Turn a non-2xx response into `ApiError::Status`, keeping the body
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Backend returned status {}: {}", status, body);
        Err(ApiError::Status { status, body })
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} was already gone", url);
            return Ok(());
        }

        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl EstateApi for HttpApiClient {
    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ApiError> {
        let url = self.endpoint("properties");
        let query = filter.query_pairs();
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(&query).send().await?;
        let properties: Vec<Property> = Self::check(response).await?.json().await?;

        debug!("Received {} properties", properties.len());
        Ok(properties)
    }

    async fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        let url = self.endpoint(&format!("properties/{}", id));
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.to_string()));
        }

        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_property(&self, property: &NewProperty) -> Result<Property, ApiError> {
        let url = self.endpoint("properties");
        debug!("POST {} ({})", url, property.title);

        let response = self.client.post(&url).json(property).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_property(&self, id: &str, property: &NewProperty) -> Result<Property, ApiError> {
        let url = self.endpoint(&format!("properties/{}", id));
        debug!("PUT {} ({})", url, property.title);

        let response = self.client.put(&url).json(property).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_property(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("properties/{}", id)).await
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, ApiError> {
        let url = self.endpoint("inquiries");
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiError> {
        let url = self.endpoint("inquiries");
        debug!("POST {}", url);

        let response = self.client.post(&url).json(inquiry).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_inquiry(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("inquiries/{}", id)).await
    }

    async fn seed(&self) -> Result<String, ApiError> {
        let url = self.endpoint("seed");
        debug!("POST {}", url);

        let response = self.client.post(&url).send().await?;
        let status: StatusMessage = Self::check(response).await?.json().await?;
        Ok(status.message)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
