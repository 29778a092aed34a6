use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of residence a listing describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Estate,
    Penthouse,
    Villa,
    Apartment,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Estate,
        PropertyType::Penthouse,
        PropertyType::Villa,
        PropertyType::Apartment,
    ];

    /// Wire name, also used as the query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Estate => "estate",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Villa => "villa",
            PropertyType::Apartment => "apartment",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("unknown property type '{}'", s.trim()))
    }
}

/// A listing as the backend returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: u64,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Property {
    /// First image, used as the card and hero picture
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The writable part of the record, as sent on create and update
    pub fn to_payload(&self) -> NewProperty {
        NewProperty {
            title: self.title.clone(),
            location: self.location.clone(),
            price: self.price,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            description: self.description.clone(),
            features: self.features.clone(),
            images: self.images.clone(),
            featured: self.featured,
        }
    }
}

/// Request body for `POST /api/properties` and `PUT /api/properties/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProperty {
    pub title: String,
    pub location: String,
    pub price: u64,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub featured: bool,
}

/// A visitor lead, optionally tied to a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub property_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/inquiries`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,
}

/// `{"message": "..."}` bodies returned by seed and delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}
