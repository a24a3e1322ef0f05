use crate::favorites::Favorites;
use crate::models::Property;
use crate::query::matches_search;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orderings offered on the favorites page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FavoritesSort {
    /// Most recently saved first
    #[default]
    DateAdded,
    DateAddedOld,
    PriceLow,
    PriceHigh,
    /// Property type, A to Z
    PropertyType,
    /// City, A to Z
    Location,
}

impl FavoritesSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoritesSort::DateAdded => "date-added",
            FavoritesSort::DateAddedOld => "date-added-old",
            FavoritesSort::PriceLow => "price-low",
            FavoritesSort::PriceHigh => "price-high",
            FavoritesSort::PropertyType => "property-type",
            FavoritesSort::Location => "location",
        }
    }
}

impl fmt::Display for FavoritesSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoritesSort {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date-added" | "date-added-new" | "" => Ok(FavoritesSort::DateAdded),
            "date-added-old" => Ok(FavoritesSort::DateAddedOld),
            "price-low" => Ok(FavoritesSort::PriceLow),
            "price-high" => Ok(FavoritesSort::PriceHigh),
            "property-type" => Ok(FavoritesSort::PropertyType),
            "location" => Ok(FavoritesSort::Location),
            other => anyhow::bail!("unknown favorites sort '{}'", other),
        }
    }
}

/// Saved listings matching `search`, stably ordered by `sort`.
/// Favorites whose listing is no longer in `properties` are skipped.
pub fn favorites_view<'a>(
    properties: &'a [Property],
    favorites: &Favorites,
    search: &str,
    sort: FavoritesSort,
) -> Vec<&'a Property> {
    let mut saved: Vec<(&'a Property, DateTime<Utc>)> = properties
        .iter()
        .filter_map(|p| favorites.get(&p.id).map(|entry| (p, entry.added_at)))
        .filter(|(p, _)| matches_search(search, p))
        .collect();

    match sort {
        FavoritesSort::DateAdded => saved.sort_by(|a, b| b.1.cmp(&a.1)),
        FavoritesSort::DateAddedOld => saved.sort_by(|a, b| a.1.cmp(&b.1)),
        FavoritesSort::PriceLow => saved.sort_by(|a, b| a.0.price.total_cmp(&b.0.price)),
        FavoritesSort::PriceHigh => saved.sort_by(|a, b| b.0.price.total_cmp(&a.0.price)),
        FavoritesSort::PropertyType => saved.sort_by(|a, b| {
            a.0.property_type
                .to_lowercase()
                .cmp(&b.0.property_type.to_lowercase())
        }),
        FavoritesSort::Location => saved.sort_by(|a, b| {
            a.0.location
                .city
                .to_lowercase()
                .cmp(&b.0.location.city.to_lowercase())
        }),
    }

    saved.into_iter().map(|(p, _)| p).collect()
}

/// Side-by-side comparison takes two or three listings
pub const COMPARE_MIN: usize = 2;
pub const COMPARE_MAX: usize = 3;

/// Resolve a comparison selection, in the order given
pub fn compare_selection<'a, S: AsRef<str>>(
    properties: &'a [Property],
    ids: &[S],
) -> Result<Vec<&'a Property>> {
    if !(COMPARE_MIN..=COMPARE_MAX).contains(&ids.len()) {
        anyhow::bail!(
            "Select between {} and {} properties to compare, got {}",
            COMPARE_MIN,
            COMPARE_MAX,
            ids.len()
        );
    }

    for (i, id) in ids.iter().enumerate() {
        let id = id.as_ref();
        if ids[..i].iter().any(|earlier| earlier.as_ref() == id) {
            anyhow::bail!("Property '{}' selected more than once", id);
        }
    }

    ids.iter()
        .map(|id| {
            let id = id.as_ref();
            properties
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow::anyhow!("Unknown property id '{}'", id))
        })
        .collect()
}
