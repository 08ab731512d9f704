// ── Static evolution chains ──

use crate::model::PokedexId;

/// Ordered chains of dex numbers, consulted before record
/// cross-references. The first chain containing an id wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTable {
    chains: Vec<Vec<PokedexId>>,
}

impl Default for ChainTable {
    fn default() -> Self {
        Self::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]])
    }
}

impl ChainTable {
    pub fn new<C, I>(chains: C) -> Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = u32>,
    {
        let mut table = Self { chains: Vec::new() };
        table.extend(chains);
        table
    }

    /// A table that never matches; every lookup takes the cross-reference path.
    pub fn empty() -> Self {
        Self { chains: Vec::new() }
    }

    /// Append chains after the existing ones. Empty chains are ignored.
    pub fn extend<C, I>(&mut self, chains: C)
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = u32>,
    {
        self.chains.extend(
            chains
                .into_iter()
                .map(|c| c.into_iter().map(PokedexId).collect::<Vec<_>>())
                .filter(|c| !c.is_empty()),
        );
    }

    pub fn chains(&self) -> &[Vec<PokedexId>] {
        &self.chains
    }

    /// Split the chain containing `id` around it: `(before, after)`, both
    /// in chain order.
    pub fn split(&self, id: PokedexId) -> Option<(&[PokedexId], &[PokedexId])> {
        self.chains.iter().find_map(|chain| {
            let pos = chain.iter().position(|c| *c == id)?;
            let (before, rest) = chain.split_at(pos);
            Some((before, rest.get(1..).unwrap_or_default()))
        })
    }
}
