//! Shared listing data for integration tests

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use homefinder::{ListingStatus, Location, Property};

/// Listing with every optional field filled in
#[allow(clippy::too_many_arguments)]
pub fn property(
    id: &str,
    title: &str,
    property_type: &str,
    status: ListingStatus,
    price: f64,
    (city, neighborhood): (&str, &str),
    area: Option<f64>,
    amenities: &[&str],
    day: u32,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        status,
        price,
        location: Location {
            city: city.to_string(),
            neighborhood: neighborhood.to_string(),
            ..Location::default()
        },
        property_type: property_type.to_string(),
        bedrooms: Some(2),
        bathrooms: Some(1),
        area,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        description: String::new(),
        images: vec![],
        host: None,
    }
}

/// Mixed collection with unique prices
pub fn sample_listings() -> Vec<Property> {
    vec![
        property("1", "Riad Saada", "Riad", ListingStatus::ForSale, 2_500_000.0, ("Marrakech", "Medina"), Some(180.0), &["WiFi", "Pool", "Garden"], 15),
        property("2", "Modern Apartment in Anfa", "Apartment", ListingStatus::ForRent, 8_500.0, ("Casablanca", "Anfa"), Some(95.0), &["WiFi", "Elevator"], 1),
        property("3", "Villa with Pool", "Villa", ListingStatus::ForSale, 4_200_000.0, ("Marrakech", "Palmeraie"), Some(320.0), &["Pool", "Garden", "Parking"], 20),
        property("4", "Family Residence", "Complex", ListingStatus::ForRent, 12_000.0, ("Rabat", "Agdal"), None, &["WiFi", "Parking"], 10),
        property("5", "Seaside Apartment", "Apartment", ListingStatus::ForRent, 6_500.0, ("Essaouira", "Medina"), Some(75.0), &["WiFi", "Sea View"], 5),
        property("6", "Traditional House in Fez", "Traditional", ListingStatus::ForSale, 1_800_000.0, ("Fez", "Medina"), Some(120.0), &["Terrace"], 25),
        property("7", "Luxury Riad in Gueliz", "Riad", ListingStatus::ForSale, 3_800_000.0, ("Marrakech", "Gueliz"), Some(250.0), &["WiFi", "Pool", "Spa"], 30),
    ]
}
