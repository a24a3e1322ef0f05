use crate::models::{ListingStatus, Location, Property};
use chrono::{TimeZone, Utc};

/// Minimal listing for unit tests; created `day` days into 2024.
pub fn listing(
    id: &str,
    title: &str,
    property_type: &str,
    status: ListingStatus,
    price: f64,
    city: &str,
    day: u32,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        status,
        price,
        location: Location {
            city: city.to_string(),
            neighborhood: String::new(),
            ..Location::default()
        },
        property_type: property_type.to_string(),
        bedrooms: None,
        bathrooms: None,
        area: None,
        amenities: Vec::new(),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            + chrono::Duration::days(i64::from(day)),
        description: String::new(),
        images: Vec::new(),
        host: None,
    }
}

/// P1: a Casablanca apartment for rent
pub fn p1() -> Property {
    let mut p = listing(
        "1",
        "Modern Apartment in Anfa",
        "Apartment",
        ListingStatus::ForRent,
        8500.0,
        "Casablanca",
        10,
    );
    p.location.neighborhood = "Anfa".to_string();
    p.area = Some(95.0);
    p.amenities = vec!["WiFi".to_string(), "Parking".to_string()];
    p
}

/// P2: a Marrakech riad for sale
pub fn p2() -> Property {
    let mut p = listing(
        "2",
        "Riad Saada - Traditional Moroccan House",
        "Riad",
        ListingStatus::ForSale,
        2_500_000.0,
        "Marrakech",
        20,
    );
    p.location.neighborhood = "Medina".to_string();
    p.area = Some(180.0);
    p.amenities = vec![
        "WiFi".to_string(),
        "Pool".to_string(),
        "Garden".to_string(),
    ];
    p
}
