use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::MetadataError;

/// Base URL of the chain icon set.
pub const CHAIN_ICON_BASE: &str = "https://defillama.com/chain-icons";

/// Icon used when the current chain has no entry in the TVL list.
pub const DEFAULT_CHAIN_ICON: &str = "ethereum";

/// BSC testnet has no TVL entry of its own; it borrows the mainnet icon.
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;
const BSC_TESTNET_ICON: &str = "binance";

/// Entry of `chains.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub name: String,
    #[serde(default)]
    pub chain: String,
    pub chain_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "infoURL", default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    pub native_currency: NativeCurrency,
}

/// Native asset of a chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_decimals() -> u8 {
    18
}

/// Entry of the chain-TVL list. Only the name and chain id are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainCoin {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_chain_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub chain_id: Option<u64>,
}

/// The TVL list mixes numeric ids, stringified ids and `null`.
fn lenient_chain_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Display data for the chain the wallet is connected to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDisplayInfo {
    pub chain_name: Option<String>,
    pub symbol: Option<String>,
    pub coin_image: String,
}

/// Read-only lookup over the two metadata lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: Vec<ChainInfo>,
    coins: Vec<ChainCoin>,
}

impl ChainRegistry {
    pub fn new(chains: Vec<ChainInfo>, coins: Vec<ChainCoin>) -> Self {
        Self { chains, coins }
    }

    /// Parse both documents. Either one being malformed fails the whole registry.
    pub fn from_json(chains_json: &str, coins_json: &str) -> Result<Self, MetadataError> {
        let chains = serde_json::from_str(chains_json).map_err(MetadataError::Chains)?;
        let coins = serde_json::from_str(coins_json).map_err(MetadataError::ChainCoins)?;
        Ok(Self::new(chains, coins))
    }

    pub fn chains(&self) -> &[ChainInfo] {
        &self.chains
    }

    pub fn coins(&self) -> &[ChainCoin] {
        &self.coins
    }

    /// First chain with `chain_id`, in list order.
    pub fn chain(&self, chain_id: u64) -> Option<&ChainInfo> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }

    /// First TVL entry with `chain_id`, in list order.
    pub fn coin(&self, chain_id: u64) -> Option<&ChainCoin> {
        self.coins.iter().find(|c| c.chain_id == Some(chain_id))
    }

    /// Derive what the wallet modal shows for `chain_id`.
    ///
    /// Chains missing from `chains.json` get no name or symbol and the default icon.
    pub fn display_info(&self, chain_id: Option<u64>) -> ChainDisplayInfo {
        let chain = chain_id.and_then(|id| self.chain(id));
        let coin = chain.and_then(|c| self.coin(c.chain_id));

        let icon = match (chain, coin) {
            (Some(c), _) if c.chain_id == BSC_TESTNET_CHAIN_ID => BSC_TESTNET_ICON.to_string(),
            (_, Some(coin)) if !coin.name.is_empty() => coin.name.to_lowercase(),
            _ => DEFAULT_CHAIN_ICON.to_string(),
        };

        ChainDisplayInfo {
            chain_name: chain.map(|c| c.name.clone()),
            symbol: chain.map(|c| c.native_currency.symbol.clone()),
            coin_image: chain_icon_url(&icon),
        }
    }
}

/// URL of the icon named `icon` (already lowercased).
pub fn chain_icon_url(icon: &str) -> String {
    format!("{}/rsz_{}.jpg", CHAIN_ICON_BASE, icon)
}
