//! Domain layer between `dexly-api` and its consumers (CLI, gateway).
//!
//! - **[`Catalog`]**: facade owning one session's state. Pages the list
//!   in through the [`ListAggregator`], resolves detail records with
//!   their [`EvolutionChain`], and memoizes the last chain.
//!
//! - **[`ListAggregator`]**: append-only, id-deduplicated store of paged
//!   records with a client-side filtered view ([`apply_filters`]),
//!   published over a `watch` channel as [`ListSnapshot`]s.
//!
//! - **[`EvolutionResolver`]**: static [`ChainTable`] first, record
//!   cross-references second; failed hops are logged and omitted.
//!
//! - **[`PokemonSource`]**: the remote-data seam, implemented for
//!   [`dexly_api::DexClient`].
//!
//! - **Domain model** ([`model`]): normalized types. The wire schema's
//!   renamed fields are resolved once, in [`convert`].

pub mod catalog;
pub mod config;
pub mod convert;
pub mod error;
pub mod evolution;
pub mod model;
pub mod source;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::Catalog;
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use error::CoreError;
pub use evolution::{ChainTable, EvolutionResolver};
pub use source::PokemonSource;
pub use store::{
    FilterOutcome, LOAD_MORE_FAILED, ListAggregator, ListSnapshot, PageRequest, apply_filters,
};
pub use stream::ListStream;

pub use model::{
    EntityId, EvolutionChain, EvolutionRef, FilterState, MAX_STAT_VALUE, PokedexId, Pokemon,
    PokemonType, Resistance, StatKind, Stats,
};
