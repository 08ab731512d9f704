//! Clap derive structures for the `dexly` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

use dexly_core::PokedexId;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dexly -- browse the Pokédex from the command line
#[derive(Debug, Parser)]
#[command(
    name = "dexly",
    version,
    about = "Browse the Pokédex from the command line",
    long_about = "Browse Pokémon, their stats and evolution chains from a remote\n\
        Pokédex API, or run a same-origin gateway in front of it.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Upstream Pokédex API base URL (overrides config)
    #[arg(long, short = 'u', env = "DEXLY_UPSTREAM_URL", global = true)]
    pub upstream: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "DEXLY_OUTPUT_FORMAT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "DEXLY_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP gateway in front of the upstream API
    Serve(ServeArgs),

    /// List Pokémon, page by page, with optional name/type filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one Pokémon with its stats and evolution chain
    #[command(alias = "get")]
    Show(ShowArgs),

    /// List the known Pokémon types
    Types,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Serve ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on, HOST:PORT (overrides config)
    #[arg(long, short = 'b', env = "DEXLY_BIND")]
    pub bind: Option<String>,
}

// ── List ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name substring
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Type id to match (repeatable; a record matches if it has any)
    #[arg(long = "type", short = 't', value_name = "TYPE_ID")]
    pub types: Vec<u32>,

    /// Records per page (overrides config)
    #[arg(long, short = 'l', value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Number of pages to load before filtering
    #[arg(long, short = 'p', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

// ── Show ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Pokédex number (`25`, `#025`)
    pub pokedex_id: PokedexId,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_padded_dex_number() {
        let cli = Cli::try_parse_from(["dexly", "show", "#025"]).unwrap_or_else(|e| panic!("{e}"));
        match cli.command {
            Command::Show(args) => assert_eq!(args.pokedex_id, PokedexId(25)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn list_collects_repeated_types() {
        let cli = Cli::try_parse_from(["dexly", "list", "-t", "4", "--type", "7", "--pages", "2"])
            .unwrap_or_else(|e| panic!("{e}"));
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.types, vec![4, 7]);
                assert_eq!(args.pages, 2);
                assert_eq!(args.limit, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn list_rejects_zero_pages() {
        assert!(Cli::try_parse_from(["dexly", "list", "--pages", "0"]).is_err());
    }
}
