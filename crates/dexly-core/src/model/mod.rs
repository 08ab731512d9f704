// ── Domain model ──

pub mod entity_id;
pub mod evolution;
pub mod filter;
pub mod pokemon;
pub mod stats;

pub use entity_id::{EntityId, PokedexId};
pub use evolution::EvolutionChain;
pub use filter::FilterState;
pub use pokemon::{EvolutionRef, Pokemon, PokemonType, Resistance};
pub use stats::{MAX_STAT_VALUE, StatKind, Stats};
