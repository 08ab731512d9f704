// ── Catalog facade ──
//
// Session state for one consumer: the paged list and the last resolved
// evolution chain. Locks are never held across an upstream await; the
// aggregator's in-flight claim keeps page loads single-file instead.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use dexly_api::{DexClient, TransportConfig};

use crate::config::CatalogConfig;
use crate::error::CoreError;
use crate::evolution::EvolutionResolver;
use crate::model::{EvolutionChain, FilterState, PokedexId, PokemonType};
use crate::source::PokemonSource;
use crate::store::{ListAggregator, ListSnapshot, PageRequest};
use crate::stream::ListStream;

/// Main entry point for consumers.
///
/// Cheaply cloneable via `Arc<CatalogInner>`.
pub struct Catalog<S = DexClient> {
    inner: Arc<CatalogInner<S>>,
}

impl<S> Clone for Catalog<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct CatalogInner<S> {
    config: CatalogConfig,
    source: S,
    resolver: EvolutionResolver,
    list: Mutex<ListAggregator>,
    last_chain: Mutex<Option<EvolutionChain>>,
}

impl Catalog<DexClient> {
    /// Build a catalog backed by the remote data source in `config`.
    pub fn connect(config: CatalogConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = DexClient::new(config.base_url.as_str(), &transport)?;
        info!(base_url = %config.base_url, "catalog ready");
        Ok(Self::with_source(client, config))
    }
}

impl<S: PokemonSource> Catalog<S> {
    pub fn with_source(source: S, config: CatalogConfig) -> Self {
        let filter = FilterState::default().with_limit(config.page_limit);
        let resolver = EvolutionResolver::new(config.chains.clone());
        Self {
            inner: Arc::new(CatalogInner {
                config,
                source,
                resolver,
                list: Mutex::new(ListAggregator::new(filter)),
                last_chain: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    // ── List ─────────────────────────────────────────────────────────

    /// Fetch the first page (pagination parameters only) and seed the
    /// store. Returns the number of records added.
    pub async fn load_first_page(&self) -> Result<usize, CoreError> {
        let limit = self.inner.list.lock().await.filter().limit;
        let records = self
            .inner
            .source
            .fetch_page(PageRequest { page: 0, limit })
            .await?;
        let added = self.inner.list.lock().await.seed(records);
        debug!(added, "first page loaded");
        Ok(added)
    }

    /// Load the next page unless one is already in flight or the last
    /// page came back short. `None` when no request was issued.
    pub async fn load_next_page(&self) -> Option<usize> {
        let request = self.inner.list.lock().await.begin_next_page()?;
        let result = self.inner.source.fetch_page(request).await;
        Some(self.inner.list.lock().await.complete_page(result))
    }

    /// Replace the filter; re-filters already loaded records only.
    pub async fn change_filter(&self, filter: FilterState) -> ListSnapshot {
        let mut list = self.inner.list.lock().await;
        list.change_filter(filter);
        list.snapshot()
    }

    pub async fn filter(&self) -> FilterState {
        self.inner.list.lock().await.filter().clone()
    }

    pub async fn list_snapshot(&self) -> ListSnapshot {
        self.inner.list.lock().await.snapshot()
    }

    pub async fn subscribe(&self) -> ListStream {
        self.inner.list.lock().await.subscribe()
    }

    // ── Detail ───────────────────────────────────────────────────────

    /// Fetch one record and its evolution chain.
    ///
    /// Fails only when the record itself cannot be fetched. A complete
    /// chain is reused while the record keeps the same identity; one with
    /// omitted hops is resolved again on the next call.
    pub async fn detail(&self, pokedex_id: PokedexId) -> Result<EvolutionChain, CoreError> {
        let current = Arc::new(self.inner.source.fetch_pokemon(pokedex_id).await?);

        if let Some(cached) = self.inner.last_chain.lock().await.as_ref() {
            if cached.current.id == current.id {
                debug!(id = %current.id, "reusing resolved chain");
                return Ok(EvolutionChain {
                    current,
                    ..cached.clone()
                });
            }
        }

        let chain = self
            .inner
            .resolver
            .resolve(&self.inner.source, current)
            .await;
        let memo = chain.is_complete().then(|| chain.clone());
        if memo.is_none() {
            debug!(id = %chain.current.id, omitted = chain.omitted, "chain incomplete, not reused");
        }
        *self.inner.last_chain.lock().await = memo;
        Ok(chain)
    }

    // ── Types ────────────────────────────────────────────────────────

    pub async fn types(&self) -> Result<Vec<PokemonType>, CoreError> {
        self.inner.source.fetch_types().await
    }
}
