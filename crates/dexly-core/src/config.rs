// ── Runtime catalog configuration ──
//
// Describes *where* the data lives and how the catalog pages through it.
// Never touches disk: the CLI builds a `CatalogConfig` and hands it in.

use std::time::Duration;

use url::Url;

use dexly_api::DEFAULT_PAGE_LIMIT;

use crate::evolution::ChainTable;

/// Default remote data source.
pub const DEFAULT_BASE_URL: &str = "https://nestjs-pokedex-api.vercel.app";

/// Configuration for a single catalog session.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Remote data source base URL.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Page size for the list aggregator.
    pub page_limit: u32,
    /// Static evolution chains consulted before record cross-references.
    pub chains: ChainTable,
}

impl CatalogConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            page_limit: DEFAULT_PAGE_LIMIT,
            chains: ChainTable::default(),
        }
    }
}
