use crate::forms::{require, split_list, ValidationError};
use crate::models::{NewProperty, Property, PropertyType};
use std::str::FromStr;

const FEATURE_SEPARATOR: char = ',';
const IMAGE_SEPARATOR: char = '\n';

/// Text fields of the admin add/edit dialog.
///
/// Numbers are held as typed text, features as one comma separated line and
/// images as one URL per line, exactly as they are edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyForm {
    pub title: String,
    pub location: String,
    pub price: String,
    pub property_type: PropertyType,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub description: String,
    pub features: String,
    pub images: String,
    pub featured: bool,
}

impl PropertyForm {
    /// Empty form for "Add Property"
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the dialog for editing an existing listing
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            location: property.location.clone(),
            price: property.price.to_string(),
            property_type: property.property_type,
            bedrooms: property.bedrooms.to_string(),
            bathrooms: property.bathrooms.to_string(),
            area: property.area.to_string(),
            description: property.description.clone(),
            features: property.features.join(", "),
            images: property.images.join("\n"),
            featured: property.featured,
        }
    }

    /// Build the request body, rejecting the form if a required field is
    /// blank, a number does not parse, or no image URL is left
    pub fn to_payload(&self) -> Result<NewProperty, ValidationError> {
        let title = require("title", &self.title)?;
        let location = require("location", &self.location)?;
        let price = parse_number("price", &self.price)?;
        let bedrooms = parse_number("bedrooms", &self.bedrooms)?;
        let bathrooms = parse_number("bathrooms", &self.bathrooms)?;
        let area = parse_number("area", &self.area)?;
        let description = require("description", &self.description)?;

        let images = split_list(&self.images, IMAGE_SEPARATOR);
        if images.is_empty() {
            return Err(ValidationError::NoImages);
        }

        Ok(NewProperty {
            title: title.to_string(),
            location: location.to_string(),
            price,
            property_type: self.property_type,
            bedrooms,
            bathrooms,
            area,
            description: description.to_string(),
            features: split_list(&self.features, FEATURE_SEPARATOR),
            images,
            featured: self.featured,
        })
    }
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    let value = require(field, raw)?.trim();
    value.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
