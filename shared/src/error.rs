//! # Error Types
//!
//! Errors shared by the web app and the metadata tool, defined with `thiserror`.
//!
//! ## Error Categories
//!
//! 1. **Balance lookups** - [`BalanceError`], produced by the RPC provider. The page
//!    never propagates these: they collapse to a zero balance (see
//!    [`PageState::on_balance_result`](crate::controller::PageState::on_balance_result)).
//! 2. **Metadata** - [`MetadataError`], produced when a chain list cannot be parsed.
//! 3. **Units** - [`UnitsError`], produced when a hex quantity is malformed.
//!
//! ## Network Changes
//!
//! A wallet that switches chain while a request is in flight leaves the provider
//! bound to a network that no longer exists. The page recognises this case by the
//! rendered message, not by variant, because the wallet itself may report it as a
//! plain RPC failure:
//!
//! ```rust
//! use shared::error::BalanceError;
//!
//! let err = BalanceError::Rpc("underlying network changed (event=\"changed\")".to_string());
//! assert!(err.is_network_changed());
//! ```

use thiserror::Error;

/// Substring that marks a balance failure caused by a chain switch.
pub const NETWORK_CHANGED: &str = "underlying network changed";

/// Failure of a balance lookup against the wallet's RPC provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceError {
    /// The wallet moved to another chain after the provider was created.
    #[error("underlying network changed (expected chain {expected}, got {actual})")]
    NetworkChanged { expected: u64, actual: u64 },

    /// The wallet or its node rejected the request.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The wallet answered with something that is not a hex quantity.
    #[error("Decoding error: {0}")]
    Decoding(#[from] UnitsError),

    /// No wallet extension is available to answer the request.
    #[error("No provider available")]
    NoProvider,
}

impl BalanceError {
    /// Whether the rendered message reports a network change.
    pub fn is_network_changed(&self) -> bool {
        self.to_string().contains(NETWORK_CHANGED)
    }
}

/// Failure to read one of the chain metadata documents.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Malformed chain list: {0}")]
    Chains(#[source] serde_json::Error),

    #[error("Malformed chain TVL list: {0}")]
    ChainCoins(#[source] serde_json::Error),
}

/// Failure to interpret a hex quantity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("Quantity is missing the 0x prefix: {0:?}")]
    MissingPrefix(String),

    #[error("Quantity has no digits: {0:?}")]
    Empty(String),

    #[error("Quantity is not valid hex: {0:?}")]
    InvalidDigit(String),

    #[error("Quantity does not fit in {bits} bits: {value:?}")]
    Overflow { value: String, bits: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_changed_variant_matches() {
        let err = BalanceError::NetworkChanged { expected: 1, actual: 56 };
        assert!(err.is_network_changed());
        assert_eq!(
            err.to_string(),
            "underlying network changed (expected chain 1, got 56)"
        );
    }

    #[test]
    fn test_rpc_message_matches_by_substring() {
        let err = BalanceError::Rpc(
            "Error: underlying network changed (event=\"changed\", network={\"chainId\":56})".to_string(),
        );
        assert!(err.is_network_changed());
    }

    #[test]
    fn test_other_failures_do_not_match() {
        assert!(!BalanceError::Rpc("execution reverted".to_string()).is_network_changed());
        assert!(!BalanceError::NoProvider.is_network_changed());
        let decoding = BalanceError::from(UnitsError::Empty("0x".to_string()));
        assert!(!decoding.is_network_changed());
    }
}
