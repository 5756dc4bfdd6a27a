//! # Fetch Chains Utility
//!
//! Downloads the public chain list and chain-TVL list and writes the snapshot
//! that `coinverter-web` compiles in. Run it before building the web app
//! whenever the metadata should be refreshed.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package fetch-chains --bin fetch_chains
//! ```
//!
//! See [`config`] for the environment variables it reads.

mod config;
mod snapshot;

use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    config.validate().map_err(anyhow::Error::msg)?;
    tracing::debug!(?config, "Loaded configuration");

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

    let registry = snapshot::fetch_registry(&client, &config).await?;
    snapshot::write_snapshot(&registry, &config.data_dir)?;

    tracing::info!("Chain metadata snapshot updated in {}", config.data_dir.display());
    Ok(())
}
