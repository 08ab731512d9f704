//! CLI configuration: thin wrapper around `dexly_config`.
//!
//! Loads the shared config file and applies `GlobalOpts` flag overrides
//! (`--upstream`, `--timeout`, `--output`, `--color`).

use clap::ValueEnum;

use dexly_core::CatalogConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use dexly_config::{Config, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Load the config file (missing file means defaults) with flag
/// overrides applied on top.
pub fn resolve(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = load_config()?;
    apply_overrides(&mut cfg, global);
    cfg.validate()?;
    Ok(cfg)
}

/// CLI flag overrides take priority over file and environment values.
pub fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(ref upstream) = global.upstream {
        cfg.upstream.base_url.clone_from(upstream);
    }
    if let Some(timeout) = global.timeout {
        cfg.upstream.timeout_secs = timeout;
    }
}

/// Translate the resolved config into the catalog's settings.
///
/// `page_limit` overrides `defaults.page_limit` when given.
pub fn catalog_config(cfg: &Config, page_limit: Option<u32>) -> Result<CatalogConfig, CliError> {
    let mut catalog = cfg.to_catalog_config()?;
    if let Some(limit) = page_limit {
        catalog.page_limit = limit;
    }
    Ok(catalog)
}

/// `--output`, else `defaults.output`, else table.
pub fn output_format(cfg: &Config, global: &GlobalOpts) -> OutputFormat {
    global
        .output
        .or_else(|| OutputFormat::from_str(&cfg.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// `--color`, else `defaults.color`, else auto.
pub fn color_mode(cfg: &Config, global: &GlobalOpts) -> ColorMode {
    global
        .color
        .or_else(|| ColorMode::from_str(&cfg.defaults.color, true).ok())
        .unwrap_or(ColorMode::Auto)
}
