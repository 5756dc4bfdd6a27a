//! # Fetch Configuration
//!
//! Loaded from environment variables (a `.env` file is honoured):
//!
//! | variable | default |
//! |---|---|
//! | `CHAINS_URL` | `https://chainid.network/chains.json` |
//! | `CHAIN_COINS_URL` | `https://api.llama.fi/chains` |
//! | `CHAIN_DATA_DIR` | `wallet-web/data` |
//! | `FETCH_TIMEOUT_SECS` | `30` |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CHAINS_URL: &str = "https://chainid.network/chains.json";
pub const DEFAULT_CHAIN_COINS_URL: &str = "https://api.llama.fi/chains";
pub const DEFAULT_DATA_DIR: &str = "wallet-web/data";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Chain list endpoint
    pub chains_url: String,

    /// Chain TVL endpoint, used for icon names
    pub chain_coins_url: String,

    /// Directory the web app embeds its snapshot from
    pub data_dir: PathBuf,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let chains_url = lookup("CHAINS_URL").unwrap_or_else(|| DEFAULT_CHAINS_URL.to_string());
        let chain_coins_url =
            lookup("CHAIN_COINS_URL").unwrap_or_else(|| DEFAULT_CHAIN_COINS_URL.to_string());
        let data_dir = PathBuf::from(
            lookup("CHAIN_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
        );

        let timeout_secs: u64 = lookup("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|e| format!("FETCH_TIMEOUT_SECS must be a valid number: {}", e))?;

        Ok(Self {
            chains_url,
            chain_coins_url,
            data_dir,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("CHAINS_URL", &self.chains_url),
            ("CHAIN_COINS_URL", &self.chain_coins_url),
        ] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(format!("{} must be an http(s) URL, got {:?}", name, url));
            }
        }

        if self.timeout.is_zero() {
            return Err("FETCH_TIMEOUT_SECS must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.chains_url, DEFAULT_CHAINS_URL);
        assert_eq!(config.chain_coins_url, DEFAULT_CHAIN_COINS_URL);
        assert_eq!(config.data_dir, PathBuf::from("wallet-web/data"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CHAINS_URL", "http://localhost:8000/chains.json"),
            ("CHAIN_DATA_DIR", "/tmp/chains"),
            ("FETCH_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.chains_url, "http://localhost:8000/chains.json");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/chains"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("FETCH_TIMEOUT_SECS", "soon")]).is_err());

        let config = config_from(&[("FETCH_TIMEOUT_SECS", "0")]).unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[("CHAIN_COINS_URL", "ftp://example.com")]).unwrap();
        assert!(config.validate().is_err());
    }
}
