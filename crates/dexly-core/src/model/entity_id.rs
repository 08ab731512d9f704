// ── Core identity types ──
//
// EntityId is the dedup key for fetched records; PokedexId is the routing
// key for detail lookups. The two are distinct even when they happen to
// carry the same number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use dexly_api::RecordId;

// ── EntityId ────────────────────────────────────────────────────────

/// Opaque identity of a record as assigned by the remote data source.
///
/// Numeric on current snapshots, textual on some older ones. Consumers
/// only compare it for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Numeric(u64),
    Text(String),
}

impl EntityId {
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<u64> for EntityId {
    fn from(n: u64) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        s.parse::<u64>()
            .map_or_else(|_| Self::Text(s.to_owned()), Self::Numeric)
    }
}

impl From<RecordId> for EntityId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Numeric(n) => Self::Numeric(n),
            RecordId::Text(s) => Self::from(s.as_str()),
        }
    }
}

// ── PokedexId ───────────────────────────────────────────────────────

/// Dex number: a species' canonical position, and the only key detail
/// lookups are routed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokedexId(pub u32);

impl PokedexId {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Catalog form, zero-padded to three digits (`#025`).
    pub fn padded(self) -> String {
        format!("#{:03}", self.0)
    }
}

impl fmt::Display for PokedexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PokedexId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

impl From<u32> for PokedexId {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_numeric_string() {
        let id = EntityId::from("25");
        assert_eq!(id.as_numeric(), Some(25));
    }

    #[test]
    fn entity_id_from_text() {
        let id: EntityId = "pikachu-25".parse().unwrap();
        assert_eq!(id, EntityId::Text("pikachu-25".into()));
        assert_eq!(id.to_string(), "pikachu-25");
    }

    #[test]
    fn entity_id_from_record_id() {
        assert_eq!(EntityId::from(RecordId::Numeric(7)), EntityId::Numeric(7));
        assert_eq!(
            EntityId::from(RecordId::Text("x".into())),
            EntityId::Text("x".into())
        );
    }

    #[test]
    fn numeric_text_record_id_matches_numeric() {
        assert_eq!(
            EntityId::from(RecordId::Text("25".into())),
            EntityId::from(RecordId::Numeric(25))
        );
        assert_eq!(EntityId::from(RecordId::Text("25".into())), EntityId::from("25"));
    }

    #[test]
    fn pokedex_id_padding() {
        assert_eq!(PokedexId(1).padded(), "#001");
        assert_eq!(PokedexId(25).padded(), "#025");
        assert_eq!(PokedexId(1010).padded(), "#1010");
        assert_eq!(PokedexId(25).to_string(), "25");
    }

    #[test]
    fn pokedex_id_parses_hash_prefix() {
        assert_eq!("#025".parse::<PokedexId>().unwrap(), PokedexId(25));
        assert_eq!(" 4 ".parse::<PokedexId>().unwrap(), PokedexId(4));
        assert!("pikachu".parse::<PokedexId>().is_err());
    }
}
