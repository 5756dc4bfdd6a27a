//! Chain metadata snapshot
//!
//! `fetch-chains` writes both lists into `data/` at build time; they are
//! compiled into the binary and parsed once on first use.

use std::sync::OnceLock;

use shared::dto::chains::ChainRegistry;

const CHAINS_JSON: &str = include_str!("../../data/chains.json");
const CHAIN_COINS_JSON: &str = include_str!("../../data/chain_coins.json");

static REGISTRY: OnceLock<ChainRegistry> = OnceLock::new();

/// The embedded registry. A malformed snapshot yields an empty registry, so
/// every chain renders with the default icon and no name.
pub fn chain_registry() -> &'static ChainRegistry {
    REGISTRY.get_or_init(|| {
        ChainRegistry::from_json(CHAINS_JSON, CHAIN_COINS_JSON).unwrap_or_else(|e| {
            log::error!("Embedded chain metadata is unusable: {}", e);
            ChainRegistry::default()
        })
    })
}
