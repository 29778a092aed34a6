use crate::models::PropertyType;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/properties`. `None` means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub property_type: Option<PropertyType>,
    /// Minimum price (USD)
    pub min_price: Option<u64>,
    /// Maximum price (USD)
    pub max_price: Option<u64>,
    /// Minimum number of bedrooms
    pub bedrooms: Option<u32>,
    pub featured: Option<bool>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
}

impl PropertyFilter {
    /// Only featured listings, as the home page asks for them
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Set parameters in wire order; blank locations are dropped
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.property_type {
            pairs.push(("property_type", t.as_str().to_string()));
        }
        if let Some(p) = self.min_price {
            pairs.push(("min_price", p.to_string()));
        }
        if let Some(p) = self.max_price {
            pairs.push(("max_price", p.to_string()));
        }
        if let Some(b) = self.bedrooms {
            pairs.push(("bedrooms", b.to_string()));
        }
        if let Some(f) = self.featured {
            pairs.push(("featured", f.to_string()));
        }
        if let Some(loc) = self.location.as_deref().map(str::trim) {
            if !loc.is_empty() {
                pairs.push(("location", loc.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_sends_nothing() {
        assert!(PropertyFilter::default().query_pairs().is_empty());
        assert!(PropertyFilter::default().is_empty());
    }

    #[test]
    fn set_fields_become_query_pairs() {
        let filter = PropertyFilter {
            property_type: Some(PropertyType::Villa),
            min_price: Some(1_000_000),
            bedrooms: Some(4),
            featured: Some(false),
            ..PropertyFilter::default()
        };

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("property_type", "villa".to_string()),
                ("min_price", "1000000".to_string()),
                ("bedrooms", "4".to_string()),
                ("featured", "false".to_string()),
            ]
        );
    }

    #[test]
    fn blank_location_is_ignored() {
        let filter = PropertyFilter {
            location: Some("   ".to_string()),
            ..PropertyFilter::default()
        };
        assert!(filter.is_empty());
    }
}
