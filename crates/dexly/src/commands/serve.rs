//! `dexly serve`: run the pass-through gateway.

use std::time::Duration;

use tracing::info;

use dexly_api::{DexClient, TransportConfig};
use dexly_core::CoreError;
use dexly_gateway::AppState;

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::error::CliError;

pub async fn handle(args: ServeArgs, cfg: &Config) -> Result<(), CliError> {
    let mut cfg = cfg.clone();
    if let Some(bind) = args.bind {
        cfg.server.bind = bind;
    }
    let addr = cfg.bind_addr()?;
    let base_url = cfg.base_url()?;

    let transport = TransportConfig::default()
        .with_timeout(Duration::from_secs(cfg.upstream.timeout_secs));
    let client = DexClient::new(base_url.as_str(), &transport)
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    info!(%addr, upstream = %base_url, "starting gateway");
    dexly_gateway::run(addr, AppState::new(client)).await?;
    Ok(())
}
