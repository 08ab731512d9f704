// ── Evolution resolution ──
//
// Static chains are walked one lookup at a time. Records outside the
// table are resolved from their own pointers: two hops back, two hops
// forward, with forward hops fanned out concurrently. A failed hop is
// logged, left out and counted in `omitted`; resolution itself never
// fails.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use super::table::ChainTable;
use crate::error::CoreError;
use crate::model::{EvolutionChain, EvolutionRef, PokedexId, Pokemon};
use crate::source::PokemonSource;

/// Outcome of following one pointer. `None` when there was nothing to
/// follow.
type Hop = Option<Result<Arc<Pokemon>, CoreError>>;

#[derive(Debug, Clone, Default)]
pub struct EvolutionResolver {
    table: ChainTable,
}

impl EvolutionResolver {
    pub fn new(table: ChainTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ChainTable {
        &self.table
    }

    /// Resolve the chain around `current`.
    pub async fn resolve<S: PokemonSource>(
        &self,
        source: &S,
        current: Arc<Pokemon>,
    ) -> EvolutionChain {
        let mut omitted = 0;

        if let Some((before, after)) = self.table.split(current.pokedex_id) {
            debug!(pokedex_id = %current.pokedex_id, "resolving from static chain");
            let pre_evolutions = lookup_in_order(source, before, &mut omitted).await;
            let evolutions = lookup_in_order(source, after, &mut omitted).await;
            return EvolutionChain {
                pre_evolutions,
                current,
                evolutions,
                truncated: false,
                omitted,
            };
        }

        debug!(pokedex_id = %current.pokedex_id, "resolving from record pointers");
        let (pre_evolutions, pre_truncated) = resolve_backward(source, &current, &mut omitted).await;
        let (evolutions, evo_truncated) = resolve_forward(source, &current, &mut omitted).await;

        EvolutionChain {
            pre_evolutions,
            current,
            evolutions,
            truncated: pre_truncated || evo_truncated,
            omitted,
        }
    }
}

// ── Hops ────────────────────────────────────────────────────────────

/// One lookup per id, sequentially, keeping order and skipping failures.
async fn lookup_in_order<S: PokemonSource>(
    source: &S,
    ids: &[PokedexId],
    omitted: &mut usize,
) -> Vec<Arc<Pokemon>> {
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(p) = settle(Some(lookup(source, *id).await), omitted) {
            resolved.push(p);
        }
    }
    resolved
}

/// Pre-evolution, then its own pre-evolution prepended.
async fn resolve_backward<S: PokemonSource>(
    source: &S,
    current: &Pokemon,
    omitted: &mut usize,
) -> (Vec<Arc<Pokemon>>, bool) {
    let Some(first) = settle(follow(source, current.pre_evolution.as_ref()).await, omitted) else {
        return (Vec::new(), false);
    };

    let mut chain = Vec::with_capacity(2);
    let mut truncated = false;
    if let Some(second) = settle(follow(source, first.pre_evolution.as_ref()).await, omitted) {
        if second.pre_evolution.is_some() {
            warn!(
                pokedex_id = %second.pokedex_id,
                "pre-evolution chain continues past two hops"
            );
            truncated = true;
        }
        chain.push(second);
    }
    chain.push(first);
    (chain, truncated)
}

/// Evolutions concurrently, then each one's evolutions concurrently.
/// Flattened per sibling as `[evo, its evos…]`, in pointer order.
async fn resolve_forward<S: PokemonSource>(
    source: &S,
    current: &Pokemon,
    omitted: &mut usize,
) -> (Vec<Arc<Pokemon>>, bool) {
    let first_hop: Vec<Arc<Pokemon>> = join_all(
        current
            .evolutions
            .iter()
            .map(|e| follow(source, Some(e))),
    )
    .await
    .into_iter()
    .filter_map(|hop| settle(hop, omitted))
    .collect();

    let second_hop: Vec<Vec<Hop>> = join_all(
        first_hop
            .iter()
            .map(|evo| join_all(evo.evolutions.iter().map(|e| follow(source, Some(e))))),
    )
    .await;

    let mut truncated = false;
    let mut evolutions = Vec::new();
    for (evo, further) in first_hop.into_iter().zip(second_hop) {
        evolutions.push(evo);
        for next in further.into_iter().filter_map(|hop| settle(hop, omitted)) {
            if !next.evolutions.is_empty() {
                warn!(
                    pokedex_id = %next.pokedex_id,
                    "evolution chain continues past two hops"
                );
                truncated = true;
            }
            evolutions.push(next);
        }
    }
    (evolutions, truncated)
}

/// Resolve a pointer, if there is one and it carries a dex number.
async fn follow<S: PokemonSource>(source: &S, pointer: Option<&EvolutionRef>) -> Hop {
    let pointer = pointer?;
    let Some(id) = pointer.pokedex_id else {
        warn!(name = %pointer.name, "evolution pointer has no dex number, skipping");
        return None;
    };
    Some(lookup(source, id).await)
}

async fn lookup<S: PokemonSource>(
    source: &S,
    id: PokedexId,
) -> Result<Arc<Pokemon>, CoreError> {
    source.fetch_pokemon(id).await.map(Arc::new).inspect_err(|e| {
        warn!(pokedex_id = %id, error = %e, "evolution hop failed");
    })
}

/// Keep a resolved hop; count a failed fetch.
fn settle(hop: Hop, omitted: &mut usize) -> Option<Arc<Pokemon>> {
    match hop? {
        Ok(p) => Some(p),
        Err(_) => {
            *omitted += 1;
            None
        }
    }
}
