// ── Paged list aggregator ──
//
// Append-only, id-keyed record store plus the filtered view derived from
// it. At most one page request is in flight; a completion that lands
// after a filter change still merges (dedup on id makes that harmless).

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::{PageRequest, apply_filters};
use crate::error::CoreError;
use crate::model::{EntityId, FilterState, Pokemon};
use crate::source::PokemonSource;
use crate::stream::ListStream;

/// Message recorded when an incremental page fails to load.
pub const LOAD_MORE_FAILED: &str = "Failed to load more Pokémon data. Please try again later.";

/// Point-in-time view published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    pub filtered: Arc<Vec<Arc<Pokemon>>>,
    pub filter: FilterState,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Number of records in the store, filtered or not.
    pub stored: usize,
}

pub struct ListAggregator {
    store: IndexMap<EntityId, Arc<Pokemon>>,
    filter: FilterState,
    filtered: Arc<Vec<Arc<Pokemon>>>,
    has_more: bool,
    in_flight: Option<PageRequest>,
    last_error: Option<String>,
    snapshot: watch::Sender<ListSnapshot>,
}

impl ListAggregator {
    pub fn new(mut filter: FilterState) -> Self {
        filter.normalize();
        let filtered = Arc::new(Vec::new());
        let (snapshot, _) = watch::channel(ListSnapshot {
            filtered: Arc::clone(&filtered),
            filter: filter.clone(),
            has_more: true,
            loading: false,
            error: None,
            stored: 0,
        });
        Self {
            store: IndexMap::new(),
            filter,
            filtered,
            has_more: true,
            in_flight: None,
            last_error: None,
            snapshot,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filtered(&self) -> Arc<Vec<Arc<Pokemon>>> {
        Arc::clone(&self.filtered)
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> ListStream {
        ListStream::new(self.snapshot.subscribe())
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Load the initial page. Returns the number of new records.
    pub fn seed(&mut self, records: Vec<Pokemon>) -> usize {
        let added = self.merge(records);
        self.refilter();
        self.publish();
        added
    }

    /// Claim the next page. `None` while a page is in flight or once the
    /// last page came back short.
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if let Some(pending) = self.in_flight {
            debug!(page = pending.page, "page already in flight");
            return None;
        }
        if !self.has_more {
            debug!("no more pages");
            return None;
        }

        self.filter.page = self.filter.page.saturating_add(1);
        let request = PageRequest {
            page: self.filter.page,
            limit: self.filter.limit,
        };
        self.in_flight = Some(request);
        self.publish();
        Some(request)
    }

    /// Apply the outcome of the in-flight page. Returns the number of new
    /// records merged (0 on failure).
    pub fn complete_page(&mut self, result: Result<Vec<Pokemon>, CoreError>) -> usize {
        let request = self.in_flight.take();
        let added = match result {
            Ok(page) => {
                let fetched = page.len();
                let added = self.merge(page);
                self.refilter();
                let limit = request.map_or(self.filter.limit, |r| r.limit);
                self.has_more = usize::try_from(limit).is_ok_and(|l| fetched == l);
                self.last_error = None;
                debug!(fetched, added, has_more = self.has_more, "page merged");
                added
            }
            Err(e) => {
                warn!(error = %e, page = ?request.map(|r| r.page), "page fetch failed");
                self.last_error = Some(LOAD_MORE_FAILED.into());
                0
            }
        };
        self.publish();
        added
    }

    /// `begin_next_page`, fetch, `complete_page`. `None` if no request
    /// was issued.
    pub async fn load_next_page<S: PokemonSource>(&mut self, source: &S) -> Option<usize> {
        let request = self.begin_next_page()?;
        let result = source.fetch_page(request).await;
        Some(self.complete_page(result))
    }

    /// Replace the filter and re-derive the view from the existing store.
    ///
    /// Never fetches: a rare name may yield an empty view even though
    /// matching records exist on pages not loaded yet.
    pub fn change_filter(&mut self, mut filter: FilterState) {
        filter.page = 0;
        filter.normalize();
        self.filter = filter;
        self.refilter();
        self.publish();
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn merge(&mut self, records: Vec<Pokemon>) -> usize {
        let before = self.store.len();
        for record in records {
            if !self.store.contains_key(&record.id) {
                self.store.insert(record.id.clone(), Arc::new(record));
            }
        }
        self.store.len() - before
    }

    fn refilter(&mut self) {
        let outcome = apply_filters(self.store.values(), &self.filter);
        self.filtered = Arc::new(outcome.filtered);
        self.has_more = outcome.has_more;
    }

    fn publish(&self) {
        let snap = ListSnapshot {
            filtered: Arc::clone(&self.filtered),
            filter: self.filter.clone(),
            has_more: self.has_more,
            loading: self.in_flight.is_some(),
            error: self.last_error.clone(),
            stored: self.store.len(),
        };
        // `send_replace` updates even with zero receivers.
        self.snapshot.send_replace(snap);
    }
}
