use crate::api::EstateApi;
use crate::models::Property;
use crate::notify::Notifier;
use crate::views::InquiryFormView;
use std::sync::Arc;
use tracing::{debug, error};

/// Image carousel position. Moving past either end wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
    open: bool,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            open: false,
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a thumbnail; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fullscreen lightbox
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    NotFound,
    Loaded { property: Property, gallery: Gallery },
}

/// Single listing page
pub struct DetailView {
    api: Arc<dyn EstateApi>,
    notifier: Arc<Notifier>,
    id: String,
    state: DetailState,
}

impl DetailView {
    pub fn new(api: Arc<dyn EstateApi>, notifier: Arc<Notifier>, id: &str) -> Self {
        Self {
            api,
            notifier,
            id: id.to_string(),
            state: DetailState::Loading,
        }
    }

    /// Fetch once. Anything but a record ends in the not-found state; only
    /// real network failures raise a toast.
    pub async fn load(&mut self) {
        self.state = match self.api.get_property(&self.id).await {
            Ok(property) => {
                let gallery = Gallery::new(property.images.len());
                DetailState::Loaded { property, gallery }
            }
            Err(e) if e.is_not_found() => {
                debug!("Property {} not found", self.id);
                DetailState::NotFound
            }
            Err(e) => {
                error!("Error fetching property {}: {}", self.id, e);
                self.notifier.error("Unable to load property");
                DetailState::NotFound
            }
        };
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn property(&self) -> Option<&Property> {
        match &self.state {
            DetailState::Loaded { property, .. } => Some(property),
            _ => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        match &mut self.state {
            DetailState::Loaded { gallery, .. } => Some(gallery),
            _ => None,
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        match &self.state {
            DetailState::Loaded { property, gallery } => {
                property.images.get(gallery.index()).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Inquiry form pre-linked to this listing
    pub fn inquiry_form(&self) -> Option<InquiryFormView> {
        self.property().map(|property| {
            InquiryFormView::for_property(self.api.clone(), self.notifier.clone(), property)
        })
    }
}
