use crate::models::Property;
use crate::query::engine::query;
use crate::query::types::{FilterSpec, QueryResult, SortKey};
use serde::{Deserialize, Serialize};

/// Listings shown per "page" of the browse grid
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Caller-owned browse state: everything a query needs, nothing it computes.
///
/// Changing the filter, the sort or the search text starts over at page 1;
/// `load_more` widens the visible prefix by one page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryState {
    pub filter: FilterSpec,
    pub sort: SortKey,
    pub page_size: i64,
    pub page: i64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortKey::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.page = 1;
    }

    /// Drop every filter criterion but keep the search text
    pub fn clear_filters(&mut self) {
        let search = std::mem::take(&mut self.filter.search_query);
        self.filter = FilterSpec {
            search_query: search,
            ..FilterSpec::default()
        };
        self.page = 1;
    }

    pub fn load_more(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn run<'a>(&self, properties: &'a [Property]) -> QueryResult<'a> {
        query(properties, &self.filter, self.sort, self.page_size, self.page)
    }
}
