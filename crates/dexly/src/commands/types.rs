//! `dexly types`

use tabled::Tabled;

use dexly_core::PokemonType;

use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::{Context, util};

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&PokemonType> for TypeRow {
    fn from(t: &PokemonType) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
        }
    }
}

pub async fn handle(cfg: &Config, ctx: &Context) -> Result<(), CliError> {
    let catalog = util::connect(cfg, None)?;
    let types = catalog
        .types()
        .await
        .map_err(|e| CliError::during("Failed to load Pokemon types", e))?;

    let rendered = output::render_list(
        ctx.format,
        &types,
        |t| TypeRow::from(t),
        |t| t.id.to_string(),
    )?;
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}
