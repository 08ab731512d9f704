// ── Pokémon domain types ──
//
// Canonical, normalized records. Every alternate wire field has already
// been resolved by `convert`; nothing downstream looks for legacy names.

use serde::{Deserialize, Serialize};

use super::entity_id::{EntityId, PokedexId};
use super::stats::Stats;

/// A species record as the catalog sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: EntityId,
    pub pokedex_id: PokedexId,
    pub name: String,
    pub slug: Option<String>,
    pub image: String,
    pub sprite: String,
    pub stats: Stats,
    /// In upstream order.
    pub types: Vec<PokemonType>,
    pub generation: Option<u32>,
    pub resistances: Vec<Resistance>,
    pub pre_evolution: Option<EvolutionRef>,
    pub evolutions: Vec<EvolutionRef>,
}

impl Pokemon {
    pub fn has_type(&self, type_id: u32) -> bool {
        self.types.iter().any(|t| t.id == type_id)
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub id: u32,
    pub name: String,
    pub image: String,
}

/// Pointer to a linked species. Only `pokedex_id` is needed to resolve it;
/// a pointer without one cannot be followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRef {
    pub name: String,
    pub pokedex_id: Option<PokedexId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resistance {
    pub name: String,
    pub damage_multiplier: f64,
    pub damage_relation: String,
}
