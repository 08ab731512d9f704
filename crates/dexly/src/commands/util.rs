//! Shared helpers for command handlers.

use dexly_core::{Catalog, EvolutionRef, Pokemon, StatKind};

use crate::config::{self, Config};
use crate::error::CliError;

/// Width of a full (100%) stat bar, in cells.
pub const BAR_WIDTH: usize = 20;

/// Build a catalog against the configured upstream.
pub fn connect(cfg: &Config, page_limit: Option<u32>) -> Result<Catalog, CliError> {
    let catalog_config = config::catalog_config(cfg, page_limit)?;
    Ok(Catalog::connect(catalog_config)?)
}

/// Comma-separated type names, or `-` when the record has none.
pub fn type_list(p: &Pokemon) -> String {
    let names = p.type_names();
    if names.is_empty() {
        "-".into()
    } else {
        names.join(", ")
    }
}

/// `name (#025)`, or just the name when the pointer has no dex number.
pub fn evolution_label(r: &EvolutionRef) -> String {
    match r.pokedex_id {
        Some(id) => format!("{} ({})", r.name, id.padded()),
        None => r.name.clone(),
    }
}

/// A fixed-width bar scaled against the maximum stat value.
pub fn stat_bar(value: u32) -> String {
    let percent = usize::try_from(StatKind::bar_percent(value)).unwrap_or(100);
    let filled = percent * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
