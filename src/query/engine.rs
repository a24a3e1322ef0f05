use crate::models::Property;
use crate::query::types::{FilterSpec, QueryResult, SortKey};
use tracing::debug;

/// Filter, sort and paginate a listing collection.
///
/// `page` is cumulative and 1-based: page N yields the first
/// `page_size * page` matches. Degenerate inputs never fail; a non-positive
/// page size or page shows nothing and reports `has_more` whenever anything
/// matched.
pub fn query<'a>(
    properties: &'a [Property],
    filter: &FilterSpec,
    sort: SortKey,
    page_size: i64,
    page: i64,
) -> QueryResult<'a> {
    let mut matched = filter_properties(properties, filter);
    sort_properties(&mut matched, sort);

    let total_matched = matched.len();
    let limit = visible_len(page_size, page);
    let has_more = limit < total_matched;
    matched.truncate(limit);

    debug!(
        "query: {} of {} listings matched, showing {} (sort={}, has_more={})",
        total_matched,
        properties.len(),
        matched.len(),
        sort,
        has_more
    );

    QueryResult {
        items: matched,
        total_matched,
        has_more,
    }
}

/// Listings passing every active criterion, in input order
pub fn filter_properties<'a>(properties: &'a [Property], filter: &FilterSpec) -> Vec<&'a Property> {
    properties.iter().filter(|p| filter.matches(p)).collect()
}

/// Stable in-place ordering; equal keys keep their relative order.
pub fn sort_properties(items: &mut [&Property], sort: SortKey) {
    match sort {
        SortKey::Relevance => {}
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::AreaDesc => items.sort_by(|a, b| b.area_or_zero().total_cmp(&a.area_or_zero())),
        SortKey::AreaAsc => items.sort_by(|a, b| a.area_or_zero().total_cmp(&b.area_or_zero())),
    }
}

fn visible_len(page_size: i64, page: i64) -> usize {
    if page_size <= 0 || page <= 0 {
        return 0;
    }
    usize::try_from(page_size.saturating_mul(page)).unwrap_or(usize::MAX)
}
