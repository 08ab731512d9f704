//! Wire types for the remote Pokédex API.
//!
//! These mirror the JSON exactly as the upstream sends it, including
//! fields that were renamed over the lifetime of the API (`special_attack`
//! vs `specialAttack`, `apiPreEvolution` vs `preEvolution`, ...). Every
//! alternate is kept as an `Option` here; picking between them happens
//! once, in `dexly-core`'s conversion layer.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

// ── Identity ─────────────────────────────────────────────────────────

/// Opaque record key as sent by the upstream (numeric today, string in
/// some older snapshots).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(u64),
    Text(String),
}

// ── Pokémon ──────────────────────────────────────────────────────────

/// A Pokémon record, from `GET /pokemons` and `GET /pokemons/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPokemon {
    pub id: RecordId,
    pub pokedex_id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sprite: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub stats: ApiStats,
    #[serde(default)]
    pub types: Vec<ApiType>,
    #[serde(default)]
    pub generation: Option<u32>,
    #[serde(default)]
    pub api_generation: Option<u32>,
    #[serde(default)]
    pub resistances: Option<Vec<ApiResistance>>,
    #[serde(default)]
    pub api_resistances: Option<Vec<ApiResistance>>,
    #[serde(default)]
    pub evolutions: Option<Vec<ApiEvolution>>,
    #[serde(default)]
    pub api_evolutions: Option<Vec<ApiEvolution>>,
    #[serde(default, deserialize_with = "lenient_pre_evolution")]
    pub pre_evolution: Option<ApiPreEvolution>,
    #[serde(default, deserialize_with = "lenient_pre_evolution")]
    pub api_pre_evolution: Option<ApiPreEvolution>,
    /// Catch-all for fields not modeled above (`resistancesWithAbilities`, ...).
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Base stats. `HP` keeps its upper-case wire name; the two special stats
/// have shipped under both camelCase and snake_case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStats {
    #[serde(rename = "HP", default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
    #[serde(default)]
    pub special_attack: Option<u32>,
    #[serde(default)]
    pub special_defense: Option<u32>,
    #[serde(rename = "special_attack", default)]
    pub special_attack_legacy: Option<u32>,
    #[serde(rename = "special_defense", default)]
    pub special_defense_legacy: Option<u32>,
    #[serde(default)]
    pub speed: Option<u32>,
}

/// Evolution pointer (`{name, pokedexId}`). Either field may be missing
/// on malformed entries; only that hop is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvolution {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokedex_id: Option<u32>,
}

/// Pre-evolution pointer. Some snapshots misspell the id as `pokedexIdd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPreEvolution {
    pub name: String,
    #[serde(default)]
    pub pokedex_id: Option<u32>,
    #[serde(default)]
    pub pokedex_idd: Option<u32>,
}

/// Type effectiveness entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResistance {
    pub name: String,
    pub damage_multiplier: f64,
    pub damage_relation: String,
}

// ── Types ────────────────────────────────────────────────────────────

/// A type record, from `GET /types`, also embedded in each Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiType {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Base forms carry `"none"` (a string) instead of an object or null.
fn lenient_pre_evolution<'de, D>(deserializer: D) -> Result<Option<ApiPreEvolution>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

// ── List query ───────────────────────────────────────────────────────

/// Query parameters for `GET /pokemons`.
///
/// `types` is emitted as a repeated parameter (`types=1&types=4`), never
/// joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub page: Option<u32>,
    pub type_id: Option<u32>,
    pub types: Vec<u32>,
    pub name: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            page: None,
            type_id: None,
            types: Vec::new(),
            name: None,
        }
    }
}

impl ListQuery {
    /// A pagination-only query: no name or type filters.
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            limit,
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(type_id) = self.type_id {
            params.push(("typeId", type_id.to_string()));
        }
        params.extend(self.types.iter().map(|t| ("types", t.to_string())));
        if let Some(ref name) = self.name {
            params.push(("name", name.clone()));
        }
        params
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn pokemon_with_legacy_fields_deserializes() {
        let raw = json!({
            "id": 2,
            "pokedexId": 2,
            "name": "Herbizarre",
            "image": "https://img/2.png",
            "sprite": "https://img/2s.png",
            "stats": { "HP": 60, "attack": 62, "defense": 63,
                       "special_attack": 80, "special_defense": 80, "speed": 60 },
            "apiTypes": [],
            "types": [{ "id": 12, "name": "Plante", "image": "https://img/t12.png" }],
            "apiGeneration": 1,
            "apiPreEvolution": { "name": "Bulbizarre", "pokedexIdd": 1 },
            "apiEvolutions": [{ "name": "Florizarre", "pokedexId": 3 }],
            "resistancesWithAbilities": []
        });

        let p: ApiPokemon = serde_json::from_value(raw).unwrap();
        assert_eq!(p.id, RecordId::Numeric(2));
        assert_eq!(p.stats.special_attack, None);
        assert_eq!(p.stats.special_attack_legacy, Some(80));
        assert_eq!(p.api_generation, Some(1));
        assert_eq!(
            p.api_pre_evolution,
            Some(ApiPreEvolution {
                name: "Bulbizarre".into(),
                pokedex_id: None,
                pokedex_idd: Some(1),
            })
        );
        assert!(p.extra.contains_key("resistancesWithAbilities"));
    }

    #[test]
    fn string_pre_evolution_is_treated_as_absent() {
        let raw = json!({
            "id": 1,
            "pokedexId": 1,
            "name": "Bulbizarre",
            "apiPreEvolution": "none",
            "preEvolution": null
        });
        let p: ApiPokemon = serde_json::from_value(raw).unwrap();
        assert!(p.api_pre_evolution.is_none());
        assert!(p.pre_evolution.is_none());
        assert_eq!(p.stats, ApiStats::default());
    }

    #[test]
    fn evolution_entry_without_dex_number_decodes() {
        let raw = json!({
            "id": 133,
            "pokedexId": 133,
            "name": "Évoli",
            "apiEvolutions": [{ "name": "Aquali", "pokedexId": 134 }, { "name": "Mystere" }, {}]
        });
        let p: ApiPokemon = serde_json::from_value(raw).unwrap();
        let evos = p.api_evolutions.unwrap();
        assert_eq!(evos[0].pokedex_id, Some(134));
        assert_eq!(evos[1].pokedex_id, None);
        assert_eq!(evos[2].name, "");
    }

    #[test]
    fn list_query_repeats_types() {
        let query = ListQuery {
            limit: 20,
            page: Some(3),
            type_id: None,
            types: vec![4, 7],
            name: Some("pika".into()),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("limit", "20".to_string()),
                ("page", "3".to_string()),
                ("types", "4".to_string()),
                ("types", "7".to_string()),
                ("name", "pika".to_string()),
            ]
        );
    }

    #[test]
    fn pagination_query_has_no_filters() {
        let query = ListQuery::page(2, 50);
        assert_eq!(
            query.to_params(),
            vec![("limit", "50".to_string()), ("page", "2".to_string())]
        );
    }
}
