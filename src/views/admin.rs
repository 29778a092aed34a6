use crate::api::{EstateApi, PropertyFilter};
use crate::forms::PropertyForm;
use crate::models::{Inquiry, Property};
use crate::notify::Notifier;
use crate::views::Outcome;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Asks the operator to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Properties,
    Inquiries,
}

/// Add/edit dialog state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(Property),
}

/// Back-office console over listings and inquiries.
///
/// Both lists are fetched together on `load` and again after every
/// successful mutation; local copies are never patched in place.
pub struct AdminPanel {
    api: Arc<dyn EstateApi>,
    notifier: Arc<Notifier>,
    tab: Tab,
    modal: Modal,
    /// Fields of the open dialog
    pub form: PropertyForm,
    properties: Vec<Property>,
    inquiries: Vec<Inquiry>,
    loading: bool,
}

impl AdminPanel {
    pub fn new(api: Arc<dyn EstateApi>, notifier: Arc<Notifier>) -> Self {
        Self {
            api,
            notifier,
            tab: Tab::default(),
            modal: Modal::default(),
            form: PropertyForm::new(),
            properties: Vec::new(),
            inquiries: Vec::new(),
            loading: true,
        }
    }

    /// Fetch both lists concurrently. Either failing leaves the previous
    /// lists untouched and raises a single error toast.
    pub async fn load(&mut self) -> Outcome {
        self.loading = true;
        let filter = PropertyFilter::default();
        let result = tokio::try_join!(
            self.api.list_properties(&filter),
            self.api.list_inquiries()
        );
        self.loading = false;

        match result {
            Ok((properties, inquiries)) => {
                info!(
                    "Admin loaded {} properties and {} inquiries",
                    properties.len(),
                    inquiries.len()
                );
                self.properties = properties;
                self.inquiries = inquiries;
                Outcome::Done(())
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                self.notifier.error("Failed to load data");
                Outcome::Failed(e)
            }
        }
    }

    /// Switching tabs never refetches
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn open_create(&mut self) {
        self.form = PropertyForm::new();
        self.modal = Modal::Create;
    }

    pub fn open_edit(&mut self, property: &Property) {
        self.form = PropertyForm::from_property(property);
        self.modal = Modal::Edit(property.clone());
    }

    /// Open the edit dialog for a listing in the loaded list
    pub fn open_edit_by_id(&mut self, id: &str) -> bool {
        match self.properties.iter().find(|p| p.id == id).cloned() {
            Some(property) => {
                self.open_edit(&property);
                true
            }
            None => false,
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Create or update from the dialog fields. On any failure the dialog
    /// and its fields are left exactly as they were.
    pub async fn submit(&mut self) -> Outcome {
        let editing = match &self.modal {
            Modal::Closed => {
                debug!("Submit with no open dialog");
                return Outcome::Cancelled;
            }
            Modal::Create => None,
            Modal::Edit(property) => Some(property.id.clone()),
        };

        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Property form rejected: {}", e);
                return Outcome::Rejected(e);
            }
        };

        let result = match &editing {
            Some(id) => self.api.update_property(id, &payload).await,
            None => self.api.create_property(&payload).await,
        };

        match result {
            Ok(saved) => {
                if editing.is_some() {
                    self.notifier.success("Property updated successfully");
                } else {
                    self.notifier.success("Property created successfully");
                }
                debug!("Saved property {}", saved.id);
                self.close_modal();
                self.load().await;
                Outcome::Done(())
            }
            Err(e) => {
                error!("Error saving property: {}", e);
                self.notifier.error("Failed to save property");
                Outcome::Failed(e)
            }
        }
    }

    pub async fn delete_property(&mut self, id: &str, confirm: &dyn Confirm) -> Outcome {
        if !confirm.confirm("Are you sure you want to delete this property?") {
            debug!("Deletion of property {} declined", id);
            return Outcome::Cancelled;
        }

        match self.api.delete_property(id).await {
            Ok(()) => {
                self.notifier.success("Property deleted");
                self.load().await;
                Outcome::Done(())
            }
            Err(e) => {
                error!("Error deleting property: {}", e);
                self.notifier.error("Failed to delete property");
                Outcome::Failed(e)
            }
        }
    }

    pub async fn delete_inquiry(&mut self, id: &str, confirm: &dyn Confirm) -> Outcome {
        if !confirm.confirm("Are you sure you want to delete this inquiry?") {
            debug!("Deletion of inquiry {} declined", id);
            return Outcome::Cancelled;
        }

        match self.api.delete_inquiry(id).await {
            Ok(()) => {
                self.notifier.success("Inquiry deleted");
                self.load().await;
                Outcome::Done(())
            }
            Err(e) => {
                error!("Error deleting inquiry: {}", e);
                self.notifier.error("Failed to delete inquiry");
                Outcome::Failed(e)
            }
        }
    }

    /// Ask the backend for demonstration listings
    pub async fn seed(&mut self) -> Outcome<String> {
        match self.api.seed().await {
            Ok(message) => {
                self.notifier.success(message.clone());
                self.load().await;
                Outcome::Done(message)
            }
            Err(e) => {
                error!("Error seeding data: {}", e);
                self.notifier.error("Failed to seed data");
                Outcome::Failed(e)
            }
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Tab caption with its count, e.g. `Properties (6)`
    pub fn tab_label(&self, tab: Tab) -> String {
        match tab {
            Tab::Properties => format!("Properties ({})", self.properties.len()),
            Tab::Inquiries => format!("Inquiries ({})", self.inquiries.len()),
        }
    }
}
