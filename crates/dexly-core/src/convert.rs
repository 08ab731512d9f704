// ── API-to-domain type conversions ──
//
// Bridges raw `dexly_api` wire types into canonical `dexly_core::model`
// types. The upstream schema renamed several fields over time; each pair
// is resolved here, once: primary, else alternate, else default.

use dexly_api::{ApiEvolution, ApiPokemon, ApiPreEvolution, ApiResistance, ApiStats, ApiType};

use crate::model::{
    EntityId, EvolutionRef, PokedexId, Pokemon, PokemonType, Resistance, Stats,
};

// ── Stats ──────────────────────────────────────────────────────────

impl From<ApiStats> for Stats {
    fn from(s: ApiStats) -> Self {
        Self {
            hp: s.hp.unwrap_or(0),
            attack: s.attack.unwrap_or(0),
            defense: s.defense.unwrap_or(0),
            special_attack: s.special_attack.or(s.special_attack_legacy).unwrap_or(0),
            special_defense: s
                .special_defense
                .or(s.special_defense_legacy)
                .unwrap_or(0),
            speed: s.speed.unwrap_or(0),
        }
    }
}

// ── References ─────────────────────────────────────────────────────

impl From<ApiEvolution> for EvolutionRef {
    fn from(e: ApiEvolution) -> Self {
        Self {
            name: e.name,
            pokedex_id: e.pokedex_id.map(PokedexId),
        }
    }
}

impl From<ApiPreEvolution> for EvolutionRef {
    fn from(p: ApiPreEvolution) -> Self {
        Self {
            name: p.name,
            pokedex_id: p.pokedex_id.or(p.pokedex_idd).map(PokedexId),
        }
    }
}

impl From<ApiResistance> for Resistance {
    fn from(r: ApiResistance) -> Self {
        Self {
            name: r.name,
            damage_multiplier: r.damage_multiplier,
            damage_relation: r.damage_relation,
        }
    }
}

impl From<ApiType> for PokemonType {
    fn from(t: ApiType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            image: t.image,
        }
    }
}

// ── Pokémon ────────────────────────────────────────────────────────

impl From<ApiPokemon> for Pokemon {
    fn from(p: ApiPokemon) -> Self {
        Self {
            id: EntityId::from(p.id),
            pokedex_id: PokedexId(p.pokedex_id),
            name: p.name,
            slug: p.slug,
            image: p.image,
            sprite: p.sprite,
            stats: Stats::from(p.stats),
            types: p.types.into_iter().map(PokemonType::from).collect(),
            generation: p.generation.or(p.api_generation),
            resistances: p
                .resistances
                .or(p.api_resistances)
                .unwrap_or_default()
                .into_iter()
                .map(Resistance::from)
                .collect(),
            pre_evolution: p
                .pre_evolution
                .or(p.api_pre_evolution)
                .map(EvolutionRef::from),
            evolutions: p
                .evolutions
                .or(p.api_evolutions)
                .unwrap_or_default()
                .into_iter()
                .map(EvolutionRef::from)
                .collect(),
        }
    }
}
