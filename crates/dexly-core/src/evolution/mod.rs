// ── Evolution chains ──

mod resolver;
mod table;

pub use resolver::EvolutionResolver;
pub use table::ChainTable;
