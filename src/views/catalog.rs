use crate::api::{EstateApi, PropertyFilter};
use crate::models::Property;
use crate::notify::Notifier;
use std::sync::Arc;
use tracing::{error, info};

/// Listings shown on the home page
pub const FEATURED_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    /// Nothing matched the current filters
    Empty,
    Listing(Vec<Property>),
}

/// The filterable property collection
pub struct CatalogView {
    api: Arc<dyn EstateApi>,
    notifier: Arc<Notifier>,
    filter: PropertyFilter,
    state: CatalogState,
}

impl CatalogView {
    pub fn new(api: Arc<dyn EstateApi>, notifier: Arc<Notifier>) -> Self {
        Self {
            api,
            notifier,
            filter: PropertyFilter::default(),
            state: CatalogState::Loading,
        }
    }

    /// Fetch the list for the current filter. The view reads as loading
    /// until the call settles; a failed fetch puts the last listing back,
    /// or shows the empty state if there was none.
    pub async fn load(&mut self) {
        let previous = std::mem::replace(&mut self.state, CatalogState::Loading);

        match self.api.list_properties(&self.filter).await {
            Ok(properties) => {
                info!("Catalog shows {} properties", properties.len());
                self.state = if properties.is_empty() {
                    CatalogState::Empty
                } else {
                    CatalogState::Listing(properties)
                };
            }
            Err(e) => {
                error!("Error fetching properties: {}", e);
                self.notifier.error("Failed to load properties");
                self.state = match previous {
                    CatalogState::Loading => CatalogState::Empty,
                    shown => shown,
                };
            }
        }
    }

    /// Every filter change triggers a full refetch
    pub async fn apply_filter(&mut self, filter: PropertyFilter) {
        self.filter = filter;
        self.load().await;
    }

    pub async fn clear_filters(&mut self) {
        self.apply_filter(PropertyFilter::default()).await;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filter.is_empty()
    }

    pub fn filter(&self) -> &PropertyFilter {
        &self.filter
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn properties(&self) -> &[Property] {
        match &self.state {
            CatalogState::Listing(properties) => properties,
            _ => &[],
        }
    }
}

/// Featured listings promoted on the landing page
pub struct HomeView {
    api: Arc<dyn EstateApi>,
    featured: Vec<Property>,
    loading: bool,
}

impl HomeView {
    pub fn new(api: Arc<dyn EstateApi>) -> Self {
        Self {
            api,
            featured: Vec::new(),
            loading: true,
        }
    }

    /// Failures are only logged; the section simply stays empty
    pub async fn load(&mut self) {
        match self.api.list_properties(&PropertyFilter::featured()).await {
            Ok(mut properties) => {
                properties.truncate(FEATURED_LIMIT);
                self.featured = properties;
            }
            Err(e) => error!("Error fetching featured properties: {}", e),
        }
        self.loading = false;
    }

    pub fn featured(&self) -> &[Property] {
        &self.featured
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
