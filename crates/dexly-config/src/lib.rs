//! Shared configuration for the dexly CLI and gateway.
//!
//! A TOML file at the platform config location, overlaid with
//! `DEXLY_`-prefixed environment variables (nested keys split on `__`,
//! e.g. `DEXLY_UPSTREAM__BASE_URL`), and translation into
//! `dexly_core::CatalogConfig`. The CLI layers its flag overrides on top.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use dexly_core::{CatalogConfig, ChainTable, DEFAULT_BASE_URL};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "DEXLY_CONFIG";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: Upstream,

    #[serde(default)]
    pub server: Server,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub evolution: Evolution,
}

/// Remote data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Upstream {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Gateway listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Server {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            page_limit: default_page_limit(),
        }
    }
}

/// Extra static chains, appended after the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Evolution {
    #[serde(default)]
    pub chains: Vec<Vec<u32>>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_bind() -> String {
    "127.0.0.1:3000".into()
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_page_limit() -> u32 {
    50
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `$DEXLY_CONFIG`, else the platform
/// config directory.
pub fn config_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(explicit);
    }
    ProjectDirs::from("com", "dexly", "dexly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("dexly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from a specific file + environment. A missing file is not an
/// error; defaults apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DEXLY_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Validation & translation ────────────────────────────────────────

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        self.bind_addr()?;
        if self.defaults.page_limit == 0 {
            return Err(ConfigError::Validation {
                field: "defaults.page_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if let Some(idx) = self.evolution.chains.iter().position(Vec::is_empty) {
            return Err(ConfigError::Validation {
                field: format!("evolution.chains[{idx}]"),
                reason: "chain must not be empty".into(),
            });
        }
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url: Url = self
            .upstream
            .base_url
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "upstream.base_url".into(),
                reason: format!("invalid URL: {}", self.upstream.base_url),
            })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "upstream.base_url".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "server.bind".into(),
                reason: format!("expected HOST:PORT, got '{}'", self.server.bind),
            })
    }

    /// The static chain table: built-in chains, then configured ones.
    pub fn chain_table(&self) -> ChainTable {
        let mut table = ChainTable::default();
        table.extend(self.evolution.chains.iter().cloned());
        table
    }

    /// Build a `CatalogConfig` with no CLI overrides.
    pub fn to_catalog_config(&self) -> Result<CatalogConfig, ConfigError> {
        let mut catalog = CatalogConfig::new(self.base_url()?);
        catalog.timeout = Duration::from_secs(self.upstream.timeout_secs);
        catalog.page_limit = self.defaults.page_limit;
        catalog.chains = self.chain_table();
        Ok(catalog)
    }
}
