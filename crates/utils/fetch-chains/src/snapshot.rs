//! Download the chain metadata lists and write the snapshot the web app embeds.

use std::fs;
use std::path::Path;

use anyhow::Context;
use reqwest::Client;
use shared::dto::chains::ChainRegistry;

use crate::config::Config;

pub const CHAINS_FILE: &str = "chains.json";
pub const CHAIN_COINS_FILE: &str = "chain_coins.json";

async fn fetch_text(client: &Client, url: &str) -> anyhow::Result<String> {
    tracing::info!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("{} returned an error status", url))?;

    response
        .text()
        .await
        .with_context(|| format!("Could not read body of {}", url))
}

/// Fetch both lists and parse them with the DTOs the web app uses.
pub async fn fetch_registry(client: &Client, config: &Config) -> anyhow::Result<ChainRegistry> {
    let (chains, coins) = tokio::try_join!(
        fetch_text(client, &config.chains_url),
        fetch_text(client, &config.chain_coins_url),
    )?;

    let registry = ChainRegistry::from_json(&chains, &coins)?;
    tracing::info!(
        chains = registry.chains().len(),
        coins = registry.coins().len(),
        "Chain metadata parsed"
    );
    Ok(registry)
}

/// Write both lists as compact JSON in the DTO shape, one file each.
pub fn write_snapshot(registry: &ChainRegistry, dir: &Path) -> anyhow::Result<()> {
    if registry.chains().is_empty() {
        tracing::warn!("Chain list is empty, every chain will render without a name");
    }

    fs::create_dir_all(dir).with_context(|| format!("Could not create {}", dir.display()))?;

    let chains = serde_json::to_string(registry.chains())?;
    let coins = serde_json::to_string(registry.coins())?;

    for (file, body) in [(CHAINS_FILE, chains), (CHAIN_COINS_FILE, coins)] {
        let path = dir.join(file);
        fs::write(&path, body + "\n")
            .with_context(|| format!("Could not write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}
