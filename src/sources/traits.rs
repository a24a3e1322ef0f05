use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that supplies the listing collection.
/// The query engine assumes the returned collection is complete and validated.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load every listing from the source
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
