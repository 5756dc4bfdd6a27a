//! # Data Transfer Objects (DTOs)
//!
//! Structures deserialized from the public chain metadata endpoints and
//! re-serialized into the snapshot the web app embeds.
//!
//! ## Module Organization
//!
//! - [`chains`] - Chain list entries, chain-TVL entries, and the lookup registry
//!
//! ## Serialization Format
//!
//! The upstream documents use camelCase keys (`chainId`, `nativeCurrency`), so
//! the DTOs rename their fields with `#[serde(rename_all = "camelCase")]`:
//!
//! - **Unknown fields**: Ignored, the upstream lists carry far more than we read
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Round trip**: A snapshot written by `fetch-chains` parses back into the same values
//!
//! ## Example JSON
//!
//! ```text
//! GET https://chainid.network/chains.json
//!
//! [
//!   {
//!     "name": "Ethereum Mainnet",
//!     "chain": "ETH",
//!     "chainId": 1,
//!     "infoURL": "https://ethereum.org",
//!     "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 }
//!   }
//! ]
//! ```
//!
//! ```text
//! GET https://api.llama.fi/chains
//!
//! [
//!   { "name": "Ethereum", "chainId": 1, "tvl": 61234567890.12 },
//!   { "name": "Solana", "chainId": null, "tvl": 9876543210.5 }
//! ]
//! ```

pub mod chains;

pub use chains::*;
