use crate::api::{EstateApi, HttpApiClient};
use crate::config::Config;
use crate::error::ApiError;
use crate::notify::{Notifier, Toast};
use crate::views::{AdminPanel, CatalogView, DetailView, HomeView, InquiryFormView};
use std::sync::Arc;
use tracing::info;

/// Root of the client: owns the shared API client and notifier and hands
/// them to each screen it opens.
pub struct App {
    api: Arc<dyn EstateApi>,
    notifier: Arc<Notifier>,
}

impl App {
    /// Build the HTTP client for `config` and start the notifier
    pub fn init(config: &Config) -> Result<Self, ApiError> {
        let client = HttpApiClient::new(config.api_url())?;
        info!("Using backend at {}", client.base_url());
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Run against any backend implementation
    pub fn with_api(api: Arc<dyn EstateApi>) -> Self {
        Self {
            api,
            notifier: Arc::new(Notifier::default()),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn home(&self) -> HomeView {
        HomeView::new(self.api.clone())
    }

    pub fn catalog(&self) -> CatalogView {
        CatalogView::new(self.api.clone(), self.notifier.clone())
    }

    pub fn property(&self, id: &str) -> DetailView {
        DetailView::new(self.api.clone(), self.notifier.clone(), id)
    }

    pub fn contact(&self) -> InquiryFormView {
        InquiryFormView::standalone(self.api.clone(), self.notifier.clone())
    }

    pub fn admin(&self) -> AdminPanel {
        AdminPanel::new(self.api.clone(), self.notifier.clone())
    }

    /// Close the notifier and return toasts nobody displayed
    pub fn shutdown(self) -> Vec<Toast> {
        self.notifier.shutdown()
    }
}
