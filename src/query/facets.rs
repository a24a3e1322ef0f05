use crate::models::Property;
use serde::Serialize;

/// Distinct values present in a collection, for populating filter pickers
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub cities: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub property_types: Vec<String>,
    pub amenities: Vec<String>,
    /// Lowest and highest price, None for an empty collection
    pub price_bounds: Option<(f64, f64)>,
}

impl Facets {
    pub fn collect(properties: &[Property]) -> Self {
        let mut facets = Facets::default();

        for property in properties {
            push_unique(&mut facets.cities, &property.location.city);
            push_unique(&mut facets.neighborhoods, &property.location.neighborhood);
            push_unique(&mut facets.property_types, &property.property_type);
            for amenity in &property.amenities {
                push_unique(&mut facets.amenities, amenity);
            }

            facets.price_bounds = Some(match facets.price_bounds {
                None => (property.price, property.price),
                Some((lo, hi)) => (lo.min(property.price), hi.max(property.price)),
            });
        }

        facets
    }
}

// First-seen order, blanks skipped
fn push_unique(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
