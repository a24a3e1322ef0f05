pub mod engine;
pub mod facets;
pub mod state;
pub mod types;

pub use engine::{filter_properties, query, sort_properties};
pub use facets::Facets;
pub use state::{QueryState, DEFAULT_PAGE_SIZE};
pub use types::{matches_search, FilterSpec, PriceRange, QueryResult, SortKey, StatusFilter};
