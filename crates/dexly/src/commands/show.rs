//! `dexly show`: one record with stats, resistances and evolution chain.

use tabled::Tabled;

use dexly_core::{EvolutionChain, Pokemon, Resistance};

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::output::{self, Painter};

use super::{Context, util};

const DOES_NOT_EVOLVE: &str = "This Pokémon does not evolve.";

#[derive(Tabled)]
struct ResistanceRow {
    #[tabled(rename = "Type")]
    name: String,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
    #[tabled(rename = "Relation")]
    relation: String,
}

impl From<&Resistance> for ResistanceRow {
    fn from(r: &Resistance) -> Self {
        Self {
            name: r.name.clone(),
            multiplier: format!("×{}", r.damage_multiplier),
            relation: r.damage_relation.clone(),
        }
    }
}

pub async fn handle(cfg: &Config, args: &ShowArgs, ctx: &Context) -> Result<(), CliError> {
    let catalog = util::connect(cfg, None)?;
    let spinner = output::spinner("Fetching Pokémon…", ctx.quiet);
    let result = catalog.detail(args.pokedex_id).await;
    spinner.finish_and_clear();
    let chain = result.map_err(|e| CliError::during("Failed to fetch Pokemon", e))?;

    let painter = ctx.painter;
    let rendered = output::render_single(
        ctx.format,
        &chain,
        |c| detail(c, painter),
        |c| c.current.pokedex_id.get().to_string(),
    )?;
    output::print_output(&rendered, ctx.quiet);
    Ok(())
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(chain: &EvolutionChain, painter: Painter) -> String {
    let p = &chain.current;
    let mut lines = vec![
        painter.heading(&format!("{} {}", p.pokedex_id.padded(), p.name)),
        format!("Types:       {}", util::type_list(p)),
        format!(
            "Generation:  {}",
            p.generation.map_or_else(|| "-".into(), |g| g.to_string())
        ),
    ];
    if let Some(ref pre) = p.pre_evolution {
        lines.push(format!("Evolves from: {}", util::evolution_label(pre)));
    }
    if !p.evolutions.is_empty() {
        let names: Vec<String> = p.evolutions.iter().map(util::evolution_label).collect();
        lines.push(format!("Evolves into: {}", names.join(", ")));
    }

    lines.push(String::new());
    lines.push(painter.heading("Stats"));
    lines.extend(stat_lines(p));

    if !p.resistances.is_empty() {
        let rows: Vec<ResistanceRow> = p.resistances.iter().map(ResistanceRow::from).collect();
        lines.push(String::new());
        lines.push(painter.heading("Resistances"));
        lines.push(output::render_table(&rows));
    }

    lines.push(String::new());
    lines.push(painter.heading("Evolution"));
    lines.push(format!("  {}", chain_line(chain, painter)));
    if chain.truncated {
        lines.push(painter.dim("  (the chain continues past the resolved stages)"));
    }
    if !chain.is_complete() {
        lines.push(painter.dim(&format!(
            "  ({} stage(s) could not be loaded; run the command again to retry)",
            chain.omitted
        )));
    }
    lines.join("\n")
}

fn stat_lines(p: &Pokemon) -> Vec<String> {
    let mut lines: Vec<String> = p
        .stats
        .entries()
        .map(|(kind, value)| {
            let name: &'static str = kind.into();
            format!("  {name:<12}{value:>4}  {}", util::stat_bar(value))
        })
        .collect();
    lines.push(format!("  {:<12}{:>4}", "Total", p.stats.total()));
    lines
}

/// `Pichu → [Pikachu] → Raichu`, with the shown record highlighted.
fn chain_line(chain: &EvolutionChain, painter: Painter) -> String {
    if chain.is_standalone() {
        return DOES_NOT_EVOLVE.to_owned();
    }
    chain
        .members()
        .map(|m| {
            let label = format!("{} ({})", m.name, m.pokedex_id.padded());
            if m.id == chain.current.id {
                painter.accent(&format!("[{label}]"))
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
