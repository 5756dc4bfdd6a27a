//! MetaMask Integration via wasm-bindgen
//!
//! This module provides JavaScript interop with the EIP-1193 provider that
//! MetaMask (and compatible extensions) inject as `window.ethereum`, plus the
//! read-only RPC provider the page uses for balance lookups.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::error::{BalanceError, UnitsError};
use shared::units::{parse_chain_id, parse_quantity};
use thiserror::Error;
use wasm_bindgen::prelude::*;

// ============================================================================
// EIP-1193 PROVIDER (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export function isMetaMask() {
    return !!(window.ethereum && window.ethereum.isMetaMask);
}

export async function ethereumRequest(method, params) {
    if (!window.ethereum) {
        throw new Error('MetaMask not installed');
    }
    return await window.ethereum.request({ method: method, params: params });
}

export function onEthereumEvent(event, handler) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on(event, handler);
        return true;
    }
    return false;
}

export function errorMessage(err) {
    if (err === null || err === undefined) {
        return String(err);
    }
    if (typeof err === 'string') {
        return err;
    }
    if (err.message) {
        return err.code !== undefined ? err.message + ' (code=' + err.code + ')' : err.message;
    }
    try {
        return JSON.stringify(err);
    } catch (_) {
        return String(err);
    }
}
")]
extern "C" {
    fn hasEthereum() -> bool;

    fn isMetaMask() -> bool;

    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    fn onEthereumEvent(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> bool;

    fn errorMessage(err: &JsValue) -> String;
}

// ============================================================================
// RUST WRAPPERS
// ============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("MetaMask is not installed")]
    NotInstalled,

    #[error("Wallet rejected the request: {0}")]
    Rejected(String),

    #[error("Unexpected wallet response: {0}")]
    Malformed(String),

    #[error(transparent)]
    Units(#[from] UnitsError),
}

impl From<WalletError> for BalanceError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::NotInstalled => BalanceError::NoProvider,
            WalletError::Units(e) => BalanceError::Decoding(e),
            WalletError::Rejected(msg) | WalletError::Malformed(msg) => BalanceError::Rpc(msg),
        }
    }
}

pub fn is_installed() -> bool {
    hasEthereum()
}

pub fn is_metamask() -> bool {
    isMetaMask()
}

async fn request<P: Serialize + ?Sized>(method: &str, params: &P) -> Result<JsValue, WalletError> {
    if !is_installed() {
        return Err(WalletError::NotInstalled);
    }
    let params = serde_wasm_bindgen::to_value(params)
        .map_err(|e| WalletError::Malformed(e.to_string()))?;
    ethereumRequest(method, params)
        .await
        .map_err(|e| WalletError::Rejected(errorMessage(&e)))
}

fn decode<T: DeserializeOwned>(value: JsValue) -> Result<T, WalletError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::Malformed(e.to_string()))
}

/// Prompt the user to authorise the page (`eth_requestAccounts`).
pub async fn request_accounts() -> Result<Vec<String>, WalletError> {
    let empty: [&str; 0] = [];
    decode(request("eth_requestAccounts", &empty).await?)
}

/// Accounts already authorised for this page, without prompting (`eth_accounts`).
pub async fn authorized_accounts() -> Result<Vec<String>, WalletError> {
    let empty: [&str; 0] = [];
    decode(request("eth_accounts", &empty).await?)
}

/// Chain the wallet is currently on (`eth_chainId`).
pub async fn current_chain_id() -> Result<u64, WalletError> {
    let empty: [&str; 0] = [];
    let chain_id: String = decode(request("eth_chainId", &empty).await?)?;
    Ok(parse_chain_id(&chain_id)?)
}

/// Register `handler` for a provider event. The closure lives for the rest of the page.
fn on_event(event: &str, handler: impl FnMut(JsValue) + 'static) -> bool {
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    let registered = onEthereumEvent(event, &closure);
    closure.forget();
    registered
}

/// Listen for account switches, chain switches and provider disconnects.
pub fn subscribe(
    mut on_accounts: impl FnMut(Vec<String>) + 'static,
    mut on_chain: impl FnMut(u64) + 'static,
    mut on_disconnect: impl FnMut() + 'static,
) -> bool {
    if !is_installed() {
        return false;
    }

    on_event("accountsChanged", move |value| match decode::<Vec<String>>(value) {
        Ok(accounts) => on_accounts(accounts),
        Err(e) => log::warn!("Ignoring accountsChanged payload: {}", e),
    });

    on_event("chainChanged", move |value| {
        let chain_id = decode::<String>(value)
            .and_then(|hex| parse_chain_id(&hex).map_err(WalletError::from));
        match chain_id {
            Ok(chain_id) => on_chain(chain_id),
            Err(e) => log::warn!("Ignoring chainChanged payload: {}", e),
        }
    });

    on_event("disconnect", move |_| on_disconnect())
}

// ============================================================================
// RPC PROVIDER
// ============================================================================

/// Block tag for reads against the head of the chain
pub const LATEST_BLOCK: &str = "latest";

/// Read-only provider bound to the chain it was created for.
///
/// Requests made after the wallet switched chain fail with
/// [`BalanceError::NetworkChanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthereumProvider {
    chain_id: u64,
}

impl EthereumProvider {
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn ensure_network(&self) -> Result<(), BalanceError> {
        let actual = current_chain_id().await?;
        if actual != self.chain_id {
            return Err(BalanceError::NetworkChanged {
                expected: self.chain_id,
                actual,
            });
        }
        Ok(())
    }

    /// Balance of `address` in the chain's smallest unit (`eth_getBalance`).
    pub async fn get_balance(&self, address: &str, block_tag: &str) -> Result<u128, BalanceError> {
        self.ensure_network().await?;
        let value = request("eth_getBalance", &(address, block_tag)).await?;
        let quantity: String = decode(value)?;
        // The wallet may have switched while the call was in flight
        self.ensure_network().await?;
        Ok(parse_quantity(&quantity)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_to_balance_error() {
        assert_eq!(BalanceError::from(WalletError::NotInstalled), BalanceError::NoProvider);
        assert_eq!(
            BalanceError::from(WalletError::Rejected("underlying network changed".to_string())),
            BalanceError::Rpc("underlying network changed".to_string())
        );
        assert!(BalanceError::from(WalletError::Rejected(
            "underlying network changed".to_string()
        ))
        .is_network_changed());
        assert_eq!(
            BalanceError::from(WalletError::Units(UnitsError::Empty("0x".to_string()))),
            BalanceError::Decoding(UnitsError::Empty("0x".to_string()))
        );
    }
}
