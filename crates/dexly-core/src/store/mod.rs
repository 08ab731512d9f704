// ── List aggregation ──
//
// Client-side view over every record paged in so far. Name and type
// filters only ever run against this local store; incremental pages are
// requested with pagination parameters alone.

mod aggregator;

use std::sync::Arc;

use dexly_api::ListQuery;

use crate::model::{FilterState, Pokemon};

pub use aggregator::{ListAggregator, ListSnapshot, LOAD_MORE_FAILED};

/// Result of [`apply_filters`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub filtered: Vec<Arc<Pokemon>>,
    /// `filtered.len() >= limit`. An approximation: the upstream total is
    /// unknown, so a view of exactly `limit` records reports more even
    /// when the next page turns out empty.
    pub has_more: bool,
}

/// Pure filter over the store.
///
/// A name term keeps records whose name contains it, ignoring case. A
/// non-empty type set keeps records carrying at least one of the ids.
/// Both dimensions must hold when both are set. Input order is kept.
pub fn apply_filters<'a, I>(store: I, filter: &FilterState) -> FilterOutcome
where
    I: IntoIterator<Item = &'a Arc<Pokemon>>,
{
    let needle = filter.name.as_deref().map(str::to_lowercase);

    let filtered: Vec<Arc<Pokemon>> = store
        .into_iter()
        .filter(|p| {
            needle
                .as_deref()
                .is_none_or(|n| p.name.to_lowercase().contains(n))
        })
        .filter(|p| filter.types.is_empty() || filter.types.iter().any(|t| p.has_type(*t)))
        .cloned()
        .collect();

    let has_more = u32::try_from(filtered.len()).map_or(true, |n| n >= filter.limit);
    FilterOutcome { filtered, has_more }
}

/// A pagination-only list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn to_query(self) -> ListQuery {
        ListQuery::page(self.page, self.limit)
    }
}
