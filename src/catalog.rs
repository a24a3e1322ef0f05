use crate::models::{Host, ListingStatus, Location, Property};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A listing as submitted by a host, before it has an id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub status: ListingStatus,
    pub price: f64,
    pub location: Location,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub host: Option<Host>,
}

/// Partial edit; only `Some` fields are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyUpdate {
    pub title: Option<String>,
    pub status: Option<ListingStatus>,
    pub price: Option<f64>,
    pub location: Option<Location>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub host: Option<Host>,
}

impl PropertyUpdate {
    fn apply(self, property: &mut Property) {
        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(location) = self.location {
            property.location = location;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if self.bedrooms.is_some() {
            property.bedrooms = self.bedrooms;
        }
        if self.bathrooms.is_some() {
            property.bathrooms = self.bathrooms;
        }
        if self.area.is_some() {
            property.area = self.area;
        }
        if let Some(amenities) = self.amenities {
            property.amenities = amenities;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(images) = self.images {
            property.images = images;
        }
        if self.host.is_some() {
            property.host = self.host;
        }
    }
}

/// In-memory listing collection managed from the host dashboard
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Append a listing; its id is the current Unix time in milliseconds,
    /// bumped until it does not collide with an existing id.
    pub fn add(&mut self, new: NewProperty) -> &Property {
        let now = Utc::now();
        let mut stamp = now.timestamp_millis();
        while self.get(&stamp.to_string()).is_some() {
            stamp += 1;
        }

        let property = Property {
            id: stamp.to_string(),
            title: new.title,
            status: new.status,
            price: new.price,
            location: new.location,
            property_type: new.property_type,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            area: new.area,
            amenities: new.amenities,
            created_at: now,
            description: new.description,
            images: new.images,
            host: new.host,
        };

        info!("Added listing {} ({})", property.id, property.title);
        let index = self.properties.len();
        self.properties.push(property);
        &self.properties[index]
    }

    pub fn update(&mut self, id: &str, update: PropertyUpdate) -> Option<&Property> {
        let property = self.properties.iter_mut().find(|p| p.id == id)?;
        update.apply(property);
        debug!("Updated listing {}", id);
        Some(property)
    }

    pub fn delete(&mut self, id: &str) -> Option<Property> {
        let index = self.properties.iter().position(|p| p.id == id)?;
        debug!("Deleted listing {}", id);
        Some(self.properties.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{p1, p2};

    fn submission(title: &str) -> NewProperty {
        NewProperty {
            title: title.to_string(),
            status: ListingStatus::ForRent,
            price: 7000.0,
            location: Location {
                city: "Tangier".to_string(),
                neighborhood: "Malabata".to_string(),
                ..Location::default()
            },
            property_type: "Apartment".to_string(),
            bedrooms: Some(2),
            bathrooms: None,
            area: None,
            amenities: vec!["Sea View".to_string()],
            description: String::new(),
            images: vec![],
            host: None,
        }
    }

    #[test]
    fn added_listings_get_unique_ids() {
        let mut catalog = Catalog::default();
        let first = catalog.add(submission("One")).id.clone();
        let second = catalog.add(submission("Two")).id.clone();

        assert_ne!(first, second);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&second).unwrap().title, "Two");
    }

    #[test]
    fn update_applies_only_given_fields() {
        let mut catalog = Catalog::new(vec![p1(), p2()]);
        let update = PropertyUpdate {
            price: Some(9000.0),
            area: Some(100.0),
            ..PropertyUpdate::default()
        };

        let updated = catalog.update("1", update).unwrap();
        assert_eq!(updated.price, 9000.0);
        assert_eq!(updated.area, Some(100.0));
        assert_eq!(updated.title, p1().title);
        assert_eq!(updated.amenities, p1().amenities);

        assert!(catalog.update("missing", PropertyUpdate::default()).is_none());
    }

    #[test]
    fn delete_removes_listing() {
        let mut catalog = Catalog::new(vec![p1(), p2()]);
        let removed = catalog.delete("1").unwrap();
        assert_eq!(removed.id, "1");
        assert!(catalog.get("1").is_none());
        assert!(catalog.delete("1").is_none());
        assert_eq!(catalog.properties().len(), 1);
    }

    #[test]
    fn partial_update_from_json() {
        let update: PropertyUpdate =
            serde_json::from_str(r#"{ "status": "for-sale", "type": "Penthouse" }"#).unwrap();
        let mut catalog = Catalog::new(vec![p1()]);
        let updated = catalog.update("1", update).unwrap();
        assert_eq!(updated.status, ListingStatus::ForSale);
        assert_eq!(updated.property_type, "Penthouse");
        assert_eq!(updated.price, 8500.0);
    }
}
