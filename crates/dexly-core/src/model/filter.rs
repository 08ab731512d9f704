// ── List filter state ──
//
// `types` and `type_id` are mutually exclusive: every builder that sets
// one clears the other, and `ListAggregator::change_filter` re-checks it.

use serde::{Deserialize, Serialize};

use dexly_api::DEFAULT_PAGE_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Zero-based page index of the last page requested.
    pub page: u32,
    /// Page size, always > 0.
    pub limit: u32,
    pub name: Option<String>,
    /// Empty means "no type filter".
    pub types: Vec<u32>,
    pub type_id: Option<u32>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_PAGE_LIMIT,
            name: None,
            types: Vec::new(),
            type_id: None,
        }
    }
}

impl FilterState {
    /// Set the name term. An empty or blank term clears it.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() { None } else { Some(name) };
        self
    }

    /// Replace the type set. Clears `type_id`.
    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = u32>) -> Self {
        self.types = Vec::new();
        for t in types {
            if !self.types.contains(&t) {
                self.types.push(t);
            }
        }
        self.type_id = None;
        self
    }

    /// Add `type_id` to the set if absent, remove it if present. Clears
    /// the single-type filter.
    #[must_use]
    pub fn toggle_type(mut self, type_id: u32) -> Self {
        if let Some(pos) = self.types.iter().position(|t| *t == type_id) {
            self.types.remove(pos);
        } else {
            self.types.push(type_id);
        }
        self.type_id = None;
        self
    }

    /// Change the page size. Resets to the first page; a zero limit is
    /// replaced by the default.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = if limit == 0 { DEFAULT_PAGE_LIMIT } else { limit };
        self.page = 0;
        self
    }

    /// Filter with nothing set.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn has_type_filter(&self) -> bool {
        !self.types.is_empty()
    }

    /// Re-establish the invariants after an arbitrary caller-built value.
    pub(crate) fn normalize(&mut self) {
        if self.has_type_filter() {
            self.type_id = None;
        }
        if self.limit == 0 {
            self.limit = DEFAULT_PAGE_LIMIT;
        }
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            self.name = None;
        }
    }
}
