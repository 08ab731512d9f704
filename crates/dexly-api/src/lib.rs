//! Async client for the remote Pokédex data API.
//!
//! - [`DexClient`] issues `GET /pokemons`, `GET /pokemons/{id}` and
//!   `GET /types`, either decoding into the wire models in [`models`] or
//!   relaying raw JSON for pass-through consumers.
//! - [`TransportConfig`] builds the underlying `reqwest::Client` with the
//!   no-cache defaults every request needs.
//! - [`Error`] is the transport-level failure taxonomy.

pub mod client;
pub mod error;
pub mod models;
mod pokemon;
pub mod transport;

pub use client::DexClient;
pub use error::Error;
pub use models::{
    ApiEvolution, ApiPokemon, ApiPreEvolution, ApiResistance, ApiStats, ApiType,
    DEFAULT_PAGE_LIMIT, ListQuery, RecordId,
};
pub use transport::TransportConfig;
