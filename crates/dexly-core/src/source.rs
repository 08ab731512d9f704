// ── Data source seam ──
//
// Everything in this crate that needs remote data goes through
// `PokemonSource`, so the aggregator and resolver can be driven by the
// real client or by an in-memory fake.

use std::future::Future;

use dexly_api::DexClient;

use crate::error::CoreError;
use crate::model::{PokedexId, Pokemon, PokemonType};
use crate::store::PageRequest;

/// Remote lookups the catalog depends on.
pub trait PokemonSource: Send + Sync {
    /// One page of the list endpoint, pagination parameters only.
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<Vec<Pokemon>, CoreError>> + Send;

    /// A single record by dex number.
    fn fetch_pokemon(
        &self,
        pokedex_id: PokedexId,
    ) -> impl Future<Output = Result<Pokemon, CoreError>> + Send;

    /// All type records.
    fn fetch_types(&self) -> impl Future<Output = Result<Vec<PokemonType>, CoreError>> + Send;
}

impl PokemonSource for DexClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Pokemon>, CoreError> {
        let raw = self.list_pokemon(&request.to_query()).await?;
        Ok(raw.into_iter().map(Pokemon::from).collect())
    }

    async fn fetch_pokemon(&self, pokedex_id: PokedexId) -> Result<Pokemon, CoreError> {
        self.get_pokemon(pokedex_id.get())
            .await
            .map(Pokemon::from)
            .map_err(|e| CoreError::from_lookup(e, pokedex_id))
    }

    async fn fetch_types(&self) -> Result<Vec<PokemonType>, CoreError> {
        let raw = self.list_types().await?;
        Ok(raw.into_iter().map(PokemonType::from).collect())
    }
}
