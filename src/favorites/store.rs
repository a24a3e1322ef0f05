use crate::favorites::Favorites;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Persistence for the favorites set across sessions
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn load(&self) -> Result<Favorites>;

    async fn save(&self, favorites: &Favorites) -> Result<()>;
}

/// Favorites kept as a JSON file; a missing file is an empty set
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FavoritesStore for JsonFileStore {
    async fn load(&self) -> Result<Favorites> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No favorites file at {}, starting empty", self.path.display());
                return Ok(Favorites::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read favorites from {}", self.path.display())
                })
            }
        };

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse favorites in {}", self.path.display()))
    }

    async fn save(&self, favorites: &Favorites) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(favorites)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write favorites to {}", self.path.display()))?;

        info!("💾 Saved {} favorites to {}", favorites.len(), self.path.display());
        Ok(())
    }
}

/// Favorites held in memory only
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Favorites>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesStore for MemoryStore {
    async fn load(&self) -> Result<Favorites> {
        Ok(self.inner.lock().await.clone())
    }

    async fn save(&self, favorites: &Favorites) -> Result<()> {
        *self.inner.lock().await = favorites.clone();
        Ok(())
    }
}
