pub mod store;
pub mod view;

pub use store::{FavoritesStore, JsonFileStore, MemoryStore};
pub use view::{compare_selection, favorites_view, FavoritesSort};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One saved listing and when it was saved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: String,
    pub added_at: DateTime<Utc>,
}

/// The session's favorite listings, in the order they were added.
/// Never consulted by the query engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(into = "Vec<FavoriteEntry>", from = "Vec<FavoriteEntry>")]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

// Repeated ids keep their first entry
impl From<Vec<FavoriteEntry>> for Favorites {
    fn from(entries: Vec<FavoriteEntry>) -> Self {
        let mut favorites = Favorites::new();
        for entry in entries {
            favorites.add_at(entry.id, entry.added_at);
        }
        favorites
    }
}

impl From<Favorites> for Vec<FavoriteEntry> {
    fn from(favorites: Favorites) -> Self {
        favorites.entries
    }
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the id was already a favorite
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        self.add_at(id, Utc::now())
    }

    pub fn add_at(&mut self, id: impl Into<String>, added_at: DateTime<Utc>) -> bool {
        let id = id.into();
        if self.is_favorite(&id) {
            return false;
        }
        debug!("favorite added: {}", id);
        self.entries.push(FavoriteEntry { id, added_at });
        true
    }

    /// Returns false if the id was not a favorite
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    /// Flip membership; returns whether the id is a favorite afterwards
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id)
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Bulk removal; returns how many were removed
    pub fn remove_many<S: AsRef<str>>(&mut self, ids: &[S]) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|e| !ids.iter().any(|id| id.as_ref() == e.id));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
