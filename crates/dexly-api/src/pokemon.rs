// Pokédex API endpoints
//
// Typed methods decode into the wire models; the `*_json` variants relay
// the upstream body untouched for the gateway's pass-through routes.

use serde_json::Value;
use tracing::debug;

use crate::client::DexClient;
use crate::error::Error;
use crate::models::{ApiPokemon, ApiType, ListQuery};

impl DexClient {
    /// List Pokémon.
    ///
    /// `GET /pokemons?limit&page&typeId&types…&name`
    pub async fn list_pokemon(&self, query: &ListQuery) -> Result<Vec<ApiPokemon>, Error> {
        let url = self.endpoint(&["pokemons"])?;
        debug!(?query, "listing pokemon");
        self.get(url, &query.to_params()).await
    }

    /// Fetch a single Pokémon by dex number.
    ///
    /// `GET /pokemons/{pokedexId}`
    pub async fn get_pokemon(&self, pokedex_id: u32) -> Result<ApiPokemon, Error> {
        let id = pokedex_id.to_string();
        let url = self.endpoint(&["pokemons", &id])?;
        debug!(pokedex_id, "fetching pokemon");
        self.get::<_, &str>(url, &[]).await
    }

    /// List all type records.
    ///
    /// `GET /types`
    pub async fn list_types(&self) -> Result<Vec<ApiType>, Error> {
        let url = self.endpoint(&["types"])?;
        debug!("listing types");
        self.get::<_, &str>(url, &[]).await
    }

    // ── Pass-through ─────────────────────────────────────────────────

    /// `GET /pokemons` with caller-supplied parameters, body relayed as JSON.
    pub async fn list_pokemon_json(&self, params: &[(String, String)]) -> Result<Value, Error> {
        let url = self.endpoint(&["pokemons"])?;
        self.get(url, params).await
    }

    /// `GET /pokemons/{id}` with the id segment passed verbatim.
    pub async fn get_pokemon_json(&self, id: &str) -> Result<Value, Error> {
        let url = self.endpoint(&["pokemons", id])?;
        self.get::<_, &str>(url, &[]).await
    }

    /// `GET /types`, body relayed as JSON.
    pub async fn list_types_json(&self) -> Result<Value, Error> {
        let url = self.endpoint(&["types"])?;
        self.get::<_, &str>(url, &[]).await
    }
}
