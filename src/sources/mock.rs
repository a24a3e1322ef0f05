use crate::models::{Host, ListingStatus, Location, Property};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tracing::info;

/// Built-in demo listings, used when no data asset is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }

    /// Typical Moroccan listings across the main cities
    pub fn listings() -> Vec<Property> {
        vec![
            mock_listing(
                "1",
                "Riad Saada - Traditional Moroccan House",
                "Riad",
                ListingStatus::ForSale,
                2_500_000.0,
                ("Marrakech", "Medina"),
                (4, 3, 180.0),
                &["WiFi", "Pool", "Garden", "Parking", "Air Conditioning"],
                ("Ahmed Benali", "+212 661-234567"),
                (2024, 1, 15),
            ),
            mock_listing(
                "2",
                "Modern Apartment in Anfa",
                "Apartment",
                ListingStatus::ForRent,
                8_500.0,
                ("Casablanca", "Anfa"),
                (2, 2, 95.0),
                &["WiFi", "Elevator", "Security", "Balcony"],
                ("Fatima Alaoui", "+212 662-345678"),
                (2024, 2, 1),
            ),
            mock_listing(
                "3",
                "Villa with Pool in Palmeraie",
                "Villa",
                ListingStatus::ForSale,
                4_200_000.0,
                ("Marrakech", "Palmeraie"),
                (5, 4, 320.0),
                &["WiFi", "Pool", "Garden", "Parking", "Air Conditioning", "Terrace"],
                ("Youssef Tazi", "+212 663-456789"),
                (2024, 1, 20),
            ),
            mock_listing(
                "4",
                "Family Residence in Agdal",
                "Complex",
                ListingStatus::ForRent,
                12_000.0,
                ("Rabat", "Agdal"),
                (3, 2, 140.0),
                &["WiFi", "Security", "Parking", "Garden", "Playground"],
                ("Laila Benjelloun", "+212 664-567890"),
                (2024, 2, 10),
            ),
            mock_listing(
                "5",
                "Traditional House in Fez Medina",
                "Traditional",
                ListingStatus::ForSale,
                1_800_000.0,
                ("Fez", "Medina"),
                (3, 2, 120.0),
                &["WiFi", "Fireplace", "Terrace"],
                ("Hassan Idrissi", "+212 665-678901"),
                (2024, 1, 25),
            ),
            mock_listing(
                "6",
                "Seaside Apartment in Essaouira",
                "Apartment",
                ListingStatus::ForRent,
                6_500.0,
                ("Essaouira", "Medina"),
                (2, 1, 75.0),
                &["WiFi", "Sea View", "Balcony"],
                ("Aicha Berrada", "+212 666-789012"),
                (2024, 2, 5),
            ),
            mock_listing(
                "7",
                "Luxury Riad in Gueliz",
                "Riad",
                ListingStatus::ForSale,
                3_800_000.0,
                ("Marrakech", "Gueliz"),
                (6, 5, 250.0),
                &["WiFi", "Pool", "Garden", "Parking", "Air Conditioning", "Spa"],
                ("Omar Fassi", "+212 667-890123"),
                (2024, 1, 30),
            ),
            mock_listing(
                "8",
                "Modern Villa in Hay Riad",
                "Villa",
                ListingStatus::ForRent,
                15_000.0,
                ("Rabat", "Hay Riad"),
                (4, 3, 200.0),
                &["WiFi", "Pool", "Garden", "Parking", "Security"],
                ("Nadia Chraibi", "+212 668-901234"),
                (2024, 2, 12),
            ),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn mock_listing(
    id: &str,
    title: &str,
    property_type: &str,
    status: ListingStatus,
    price: f64,
    (city, neighborhood): (&str, &str),
    (bedrooms, bathrooms, area): (u32, u32, f64),
    amenities: &[&str],
    (host_name, host_phone): (&str, &str),
    (year, month, day): (i32, u32, u32),
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
        bedrooms: Some(bedrooms),
        bathrooms: Some(bathrooms),
        area: Some(area),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        created_at: Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        description: format!("{} in {}, {}.", property_type, neighborhood, city),
        images: vec![],
        host: Some(Host {
            name: host_name.to_string(),
            phone: host_phone.to_string(),
        }),
    }
}

#[async_trait]
impl ListingSource for MockSource {
    async fn load(&self) -> Result<Vec<Property>> {
        info!("📋 Using built-in mock listings");
        Ok(Self::listings())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
