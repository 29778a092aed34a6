#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use quiet_wealth::api::{EstateApi, PropertyFilter};
use quiet_wealth::models::{Inquiry, NewInquiry, NewProperty, Property, PropertyType};
use quiet_wealth::ApiError;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory backend that counts every call it receives
#[derive(Default)]
pub struct FakeBackend {
    pub properties: Mutex<Vec<Property>>,
    pub inquiries: Mutex<Vec<Inquiry>>,
    pub calls: AtomicUsize,
    pub last_update: Mutex<Option<(String, NewProperty)>>,
    pub last_create: Mutex<Option<NewProperty>>,
    pub last_inquiry: Mutex<Option<NewInquiry>>,
    fail_writes: AtomicBool,
    fail_inquiry_list: AtomicBool,
    fail_reads: AtomicBool,
    delay: Mutex<Option<Duration>>,
    next_id: AtomicUsize,
}

impl FakeBackend {
    pub fn with_properties(properties: Vec<Property>) -> Self {
        let backend = Self::default();
        *backend.properties.lock().unwrap() = properties;
        backend
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_inquiry_list(&self) {
        self.fail_inquiry_list.store(true, Ordering::SeqCst);
    }

    /// Property list and detail calls answer 503
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Hold property lists and inquiry submissions back before answering
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    async fn pause(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn read_guard(&self) -> Result<(), ApiError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(ApiError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "read failed".to_string(),
            })
        } else {
            Ok(())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn write_guard(&self) -> Result<(), ApiError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "write failed".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 100)
    }
}

fn matches(filter: &PropertyFilter, p: &Property) -> bool {
    filter.property_type.map_or(true, |t| p.property_type == t)
        && filter.min_price.map_or(true, |min| p.price >= min)
        && filter.max_price.map_or(true, |max| p.price <= max)
        && filter.bedrooms.map_or(true, |b| p.bedrooms >= b)
        && filter.featured.map_or(true, |f| p.featured == f)
        && filter.location.as_deref().map_or(true, |loc| {
            p.location.to_lowercase().contains(&loc.to_lowercase())
        })
}

fn materialize(id: String, body: &NewProperty) -> Property {
    Property {
        id,
        title: body.title.clone(),
        location: body.location.clone(),
        price: body.price,
        property_type: body.property_type,
        bedrooms: body.bedrooms,
        bathrooms: body.bathrooms,
        area: body.area,
        description: body.description.clone(),
        features: body.features.clone(),
        images: body.images.clone(),
        featured: body.featured,
        created_at: Some(Utc::now()),
    }
}

#[async_trait]
impl EstateApi for FakeBackend {
    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ApiError> {
        self.record();
        self.pause().await;
        self.read_guard()?;
        let properties = self.properties.lock().unwrap();
        Ok(properties.iter().filter(|p| matches(filter, p)).cloned().collect())
    }

    async fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        self.record();
        self.read_guard()?;
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create_property(&self, property: &NewProperty) -> Result<Property, ApiError> {
        self.record();
        self.write_guard()?;
        let created = materialize(self.next_id("prop"), property);
        self.properties.lock().unwrap().push(created.clone());
        *self.last_create.lock().unwrap() = Some(property.clone());
        Ok(created)
    }

    async fn update_property(&self, id: &str, property: &NewProperty) -> Result<Property, ApiError> {
        self.record();
        self.write_guard()?;
        *self.last_update.lock().unwrap() = Some((id.to_string(), property.clone()));
        let mut properties = self.properties.lock().unwrap();
        let slot = properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        *slot = materialize(id.to_string(), property);
        Ok(slot.clone())
    }

    async fn delete_property(&self, id: &str) -> Result<(), ApiError> {
        self.record();
        self.write_guard()?;
        self.properties.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, ApiError> {
        self.record();
        if self.fail_inquiry_list.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: StatusCode::BAD_GATEWAY,
                body: "upstream down".to_string(),
            });
        }
        let mut inquiries = self.inquiries.lock().unwrap().clone();
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(inquiries)
    }

    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiError> {
        self.record();
        self.pause().await;
        self.write_guard()?;
        *self.last_inquiry.lock().unwrap() = Some(inquiry.clone());
        let created = Inquiry {
            id: self.next_id("inq"),
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            message: inquiry.message.clone(),
            property_id: inquiry.property_id.clone(),
            property_title: inquiry.property_title.clone(),
            created_at: Utc::now(),
        };
        self.inquiries.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_inquiry(&self, id: &str) -> Result<(), ApiError> {
        self.record();
        self.write_guard()?;
        self.inquiries.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn seed(&self) -> Result<String, ApiError> {
        self.record();
        self.write_guard()?;
        let mut properties = self.properties.lock().unwrap();
        if !properties.is_empty() {
            return Ok(format!("Database already has {} properties", properties.len()));
        }
        *properties = sample_properties();
        Ok(format!("Seeded {} properties", properties.len()))
    }

    fn base_url(&self) -> &str {
        "memory://"
    }
}

pub fn property(id: &str, title: &str, property_type: PropertyType, price: u64, featured: bool) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        location: "Beverly Hills, California".to_string(),
        price,
        property_type,
        bedrooms: 5,
        bathrooms: 6,
        area: 8_200,
        description: "An architectural masterpiece.".to_string(),
        features: vec!["Infinity Pool".to_string(), "Wine Cellar".to_string()],
        images: vec!["a".to_string(), "b".to_string()],
        featured,
        created_at: None,
    }
}

pub fn sample_properties() -> Vec<Property> {
    vec![
        property("midnight", "The Midnight Estate", PropertyType::Estate, 45_000_000, true),
        property("obsidian", "Obsidian Penthouse", PropertyType::Penthouse, 32_000_000, true),
        property("serenita", "Villa Serenità", PropertyType::Villa, 28_000_000, true),
        property("pavilion", "The Glass Pavilion", PropertyType::Estate, 38_000_000, false),
    ]
}
