use crate::models::{ListingStatus, Property};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// An inverted range (min > max) contains nothing.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }
}

/// Which transactional statuses a query accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    ForSale,
    ForRent,
}

impl StatusFilter {
    pub fn accepts(&self, status: ListingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::ForSale => status == ListingStatus::ForSale,
            StatusFilter::ForRent => status == ListingStatus::ForRent,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            "for-sale" | "sale" => Ok(StatusFilter::ForSale),
            "for-rent" | "rent" => Ok(StatusFilter::ForRent),
            other => anyhow::bail!("unknown status filter '{}'", other),
        }
    }
}

/// Filter criteria for listing queries. Every active criterion must hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub price_range: PriceRange,
    /// Accepted property types, matched as case-insensitive substrings (empty = any)
    pub property_types: Vec<String>,
    /// Exact city, empty or None means any
    pub city: Option<String>,
    /// Exact neighborhood, empty or None means any
    pub neighborhood: Option<String>,
    /// Tags a listing must carry, all of them
    pub amenities: Vec<String>,
    pub status: StatusFilter,
    pub search_query: String,
}

impl FilterSpec {
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_types.push(property_type.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.push(amenity.into());
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Whether a single property passes every active criterion
    pub fn matches(&self, property: &Property) -> bool {
        if !self.status.accepts(property.status) {
            return false;
        }

        if !self.price_range.contains(property.price) {
            return false;
        }

        if !self.property_types.is_empty() {
            let property_type = property.property_type.to_lowercase();
            if !self
                .property_types
                .iter()
                .any(|t| property_type.contains(&t.to_lowercase()))
            {
                return false;
            }
        }

        if let Some(city) = non_empty(&self.city) {
            if property.location.city != city {
                return false;
            }
        }

        if let Some(neighborhood) = non_empty(&self.neighborhood) {
            if property.location.neighborhood != neighborhood {
                return false;
            }
        }

        if !self.amenities.iter().all(|a| property.has_amenity(a)) {
            return false;
        }

        matches_search(&self.search_query, property)
    }

    /// Number of criteria that currently restrict results
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.price_range.is_unbounded() {
            count += 1;
        }
        count += self.property_types.len();
        count += self.amenities.len();
        if non_empty(&self.city).is_some() {
            count += 1;
        }
        if non_empty(&self.neighborhood).is_some() {
            count += 1;
        }
        if self.status != StatusFilter::All {
            count += 1;
        }
        count
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Free-text match against title, city, neighborhood and type.
/// An empty query matches everything.
pub fn matches_search(query: &str, property: &Property) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [
        property.title.as_str(),
        property.location.city.as_str(),
        property.location.neighborhood.as_str(),
        property.property_type.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Result ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Input order
    #[default]
    Relevance,
    #[serde(alias = "price-low")]
    PriceAsc,
    #[serde(alias = "price-high")]
    PriceDesc,
    Newest,
    Oldest,
    #[serde(alias = "area-large")]
    AreaDesc,
    #[serde(alias = "area-small")]
    AreaAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::AreaDesc => "area-desc",
            SortKey::AreaAsc => "area-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" | "" => Ok(SortKey::Relevance),
            "price-asc" | "price-low" => Ok(SortKey::PriceAsc),
            "price-desc" | "price-high" => Ok(SortKey::PriceDesc),
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "area-desc" | "area-large" => Ok(SortKey::AreaDesc),
            "area-asc" | "area-small" => Ok(SortKey::AreaAsc),
            other => anyhow::bail!("unknown sort key '{}'", other),
        }
    }
}

/// Visible slice of a query plus what the "load more" control needs
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<'a> {
    pub items: Vec<&'a Property>,
    pub total_matched: usize,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_accepts_ui_aliases() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
        assert_eq!("area-large".parse::<SortKey>().unwrap(), SortKey::AreaDesc);
        assert_eq!("Area-Small".parse::<SortKey>().unwrap(), SortKey::AreaAsc);
        assert!("cheapest".parse::<SortKey>().is_err());

        let key: SortKey = serde_json::from_str("\"price-high\"").unwrap();
        assert_eq!(key, SortKey::PriceDesc);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"price-desc\"");
    }

    #[test]
    fn status_filter_parses_short_forms() {
        assert_eq!("rent".parse::<StatusFilter>().unwrap(), StatusFilter::ForRent);
        assert_eq!("for-sale".parse::<StatusFilter>().unwrap(), StatusFilter::ForSale);
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("leased".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn inverted_price_range_is_empty() {
        let range = PriceRange::new(500.0, 100.0);
        assert!(!range.contains(100.0));
        assert!(!range.contains(300.0));
        assert!(!range.contains(500.0));
    }

    #[test]
    fn default_filter_has_no_active_criteria() {
        let filter = FilterSpec::default();
        assert_eq!(filter.active_filter_count(), 0);

        let filter = filter
            .with_price_range(0.0, 10_000.0)
            .with_city("")
            .with_amenity("Pool")
            .with_status(StatusFilter::ForRent);
        assert_eq!(filter.active_filter_count(), 3);
    }

    #[test]
    fn filter_spec_deserializes_partial_json() {
        let filter: FilterSpec =
            serde_json::from_str(r#"{ "status": "for-rent", "searchQuery": "anfa" }"#).unwrap();
        assert_eq!(filter.status, StatusFilter::ForRent);
        assert_eq!(filter.search_query, "anfa");
        assert!(filter.price_range.is_unbounded());
        assert!(filter.amenities.is_empty());
    }
}
