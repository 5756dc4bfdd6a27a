//! # Coinverter Shared Library
//!
//! Browser-independent domain logic for the Coinverter page and the build-time
//! metadata tool. Nothing in here touches the DOM or `window.ethereum`, so the
//! whole crate is exercised by plain `cargo test` on the host.
//!
//! ## Structure
//!
//! - **[`dto`]**: Wire types for the two chain metadata lists
//!   - **[`dto::chains`]**: `chains.json` entries, chain-TVL entries, and the
//!     [`ChainRegistry`](dto::chains::ChainRegistry) lookup built from them
//! - **[`conversion`]**: The NEP/BUSD pair bound by a fixed rate
//! - **[`units`]**: Hex quantities and smallest-unit to display-unit conversion
//! - **[`session`]**: Wallet connection state and the connector event reducer
//! - **[`controller`]**: Modal visibility and balance bookkeeping for the page
//! - **[`error`]**: Error types shared by the web app and the fetch tool
//! - **[`utils`]**: Address formatting
//!
//! ## Usage in the Web App
//!
//! ```rust
//! use shared::conversion::ConversionPair;
//!
//! let mut pair = ConversionPair::default();
//! pair.set_source("10");
//! assert_eq!(pair.target(), "30.00");
//! ```
//!
//! ## Usage in the Fetch Tool
//!
//! ```rust
//! use shared::dto::chains::ChainRegistry;
//!
//! let registry = ChainRegistry::from_json("[]", "[]").unwrap();
//! assert!(registry.chain(1).is_none());
//! ```

pub mod controller;
pub mod conversion;
pub mod dto;
pub mod error;
pub mod session;
pub mod units;
pub mod utils;

pub use error::{BalanceError, MetadataError, UnitsError};
pub use utils::*;
