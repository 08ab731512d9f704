use std::sync::Arc;

use serde::Serialize;

use super::pokemon::Pokemon;

/// Resolved evolution relationships of one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionChain {
    /// Oldest first.
    pub pre_evolutions: Vec<Arc<Pokemon>>,
    pub current: Arc<Pokemon>,
    /// In discovery order.
    pub evolutions: Vec<Arc<Pokemon>>,
    /// Set when a resolved record still pointed further than the
    /// resolver follows.
    pub truncated: bool,
    /// Hops whose lookup failed and were left out. Zero means the chain
    /// is complete as far as the resolver follows.
    pub omitted: usize,
}

impl EvolutionChain {
    pub fn is_complete(&self) -> bool {
        self.omitted == 0
    }

    /// Neither predecessors nor successors were found.
    pub fn is_standalone(&self) -> bool {
        self.pre_evolutions.is_empty() && self.evolutions.is_empty()
    }

    /// Every member, oldest first, `current` included.
    pub fn members(&self) -> impl Iterator<Item = &Arc<Pokemon>> {
        self.pre_evolutions
            .iter()
            .chain(std::iter::once(&self.current))
            .chain(self.evolutions.iter())
    }
}
