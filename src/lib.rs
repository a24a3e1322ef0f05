//! Listing search for HomeFinder: a pure filter/sort/paginate engine over an
//! in-memory property collection, plus the sources, favorites and export
//! collaborators around it.

pub mod catalog;
pub mod config;
pub mod export;
pub mod favorites;
pub mod models;
pub mod query;
pub mod sources;

#[cfg(test)]
pub(crate) mod fixtures;

pub use models::{Host, ListingStatus, Location, Property};
pub use query::{query, FilterSpec, QueryResult, QueryState, SortKey, StatusFilter};
