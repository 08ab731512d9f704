//! `dexly list`: page through the catalog, then filter what was loaded.

use std::sync::Arc;

use futures_util::StreamExt;
use indicatif::ProgressBar;
use tabled::Tabled;
use tracing::debug;

use dexly_core::{Catalog, FilterState, ListStream, Pokemon};

use crate::cli::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::{Context, util};

/// Shown once the upstream has no further pages.
const NO_MORE: &str = "No more Pokémon to load";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PokemonRow {
    #[tabled(rename = "#")]
    dex: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Gen")]
    generation: String,
    #[tabled(rename = "Total")]
    total: u32,
}

impl From<&Arc<Pokemon>> for PokemonRow {
    fn from(p: &Arc<Pokemon>) -> Self {
        Self {
            dex: p.pokedex_id.padded(),
            name: p.name.clone(),
            types: util::type_list(p),
            generation: p
                .generation
                .map_or_else(|| "-".into(), |g| g.to_string()),
            total: p.stats.total(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(cfg: &Config, args: ListArgs, ctx: &Context) -> Result<(), CliError> {
    let catalog = util::connect(cfg, args.limit)?;
    let spinner = output::spinner("Loading Pokémon…", ctx.quiet || ctx.format != OutputFormat::Table);

    let progress = tokio::spawn(track_progress(catalog.subscribe().await, spinner.clone()));
    let result = load_pages(&catalog, args.pages).await;
    progress.abort();
    spinner.finish_and_clear();
    result?;

    // `has_more` after a filter change describes the filtered view; the
    // paging hint needs the upstream's answer, captured beforehand.
    let paged = catalog.list_snapshot().await;
    let filter = FilterState::default()
        .with_limit(catalog.config().page_limit)
        .with_name(args.name.unwrap_or_default())
        .with_types(args.types);
    let snapshot = catalog.change_filter(filter).await;

    let rendered = output::render_list(
        ctx.format,
        snapshot.filtered.as_slice(),
        |p| PokemonRow::from(p),
        |p| p.pokedex_id.get().to_string(),
    )?;
    output::print_output(&rendered, ctx.quiet);

    if ctx.format == OutputFormat::Table {
        if let Some(ref error) = paged.error {
            output::print_hint(&ctx.painter.accent(error), ctx.quiet);
        }
        let hint = if paged.has_more {
            format!(
                "{} of {} loaded; more available with --pages {}",
                snapshot.filtered.len(),
                paged.stored,
                args.pages + 1
            )
        } else {
            NO_MORE.to_owned()
        };
        output::print_hint(&ctx.painter.dim(&hint), ctx.quiet);
    }
    Ok(())
}

/// Keep the spinner message in step with the number of stored records.
async fn track_progress(list: ListStream, spinner: ProgressBar) {
    let mut updates = list.into_stream();
    while let Some(snapshot) = updates.next().await {
        spinner.set_message(format!("Loading Pokémon… {} loaded", snapshot.stored));
    }
}

/// Load `pages` pages: the first one must succeed, later failures are
/// recorded on the list and end the walk.
async fn load_pages(catalog: &Catalog, pages: u32) -> Result<(), CliError> {
    catalog
        .load_first_page()
        .await
        .map_err(|e| CliError::during("Failed to fetch Pokemon list", e))?;

    for page in 1..pages {
        if catalog.load_next_page().await.is_none() {
            debug!(page, "no further pages requested");
            break;
        }
        if catalog.list_snapshot().await.error.is_some() {
            break;
        }
    }
    Ok(())
}
