//! MetaMask connector state
//!
//! The page observes the wallet through the same four accessors the JS
//! connector hooks expose: chain id, accounts, active flag and provider. All of
//! them read one [`WalletState`] signal, so any component calling them inside a
//! reactive scope re-runs when the session changes.

use leptos::prelude::*;
use shared::session::{ConnectorEvent, WalletState};

use crate::services::wallet::{self, EthereumProvider, WalletError};

/// Global MetaMask connector
#[derive(Clone, Copy)]
pub struct MetaMask {
    state: RwSignal<WalletState>,
}

impl MetaMask {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(WalletState::Disconnected),
        }
    }

    fn dispatch(&self, event: ConnectorEvent) {
        log::debug!("Connector event: {:?}", event);
        self.state
            .try_update(|state| *state = std::mem::take(state).apply(event));
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.state.with(|state| state.chain_id())
    }

    pub fn accounts(&self) -> Option<Vec<String>> {
        self.state.with(|state| state.accounts().map(<[String]>::to_vec))
    }

    pub fn is_active(&self) -> bool {
        self.state.with(|state| state.is_active())
    }

    pub fn is_activating(&self) -> bool {
        self.state.with(|state| state.is_connecting())
    }

    /// RPC provider for the current chain, if connected.
    pub fn provider(&self) -> Option<EthereumProvider> {
        self.chain_id().map(EthereumProvider::new)
    }

    /// Ask the wallet for access and start a session.
    pub async fn activate(self) -> Result<(), WalletError> {
        self.dispatch(ConnectorEvent::ActivationStarted);

        let result = async {
            let accounts = wallet::request_accounts().await?;
            let chain_id = wallet::current_chain_id().await?;
            Ok::<_, WalletError>((chain_id, accounts))
        }
        .await;

        match result {
            Ok((chain_id, accounts)) => {
                log::info!("Connected to chain {} with {} account(s)", chain_id, accounts.len());
                self.dispatch(ConnectorEvent::Activated { chain_id, accounts });
                Ok(())
            }
            Err(e) => {
                log::error!("Wallet activation failed: {}", e);
                self.dispatch(ConnectorEvent::ActivationFailed);
                Err(e)
            }
        }
    }

    /// Resume a previously authorised session without prompting.
    pub async fn connect_eagerly(self) -> Result<(), WalletError> {
        let accounts = wallet::authorized_accounts().await?;
        if accounts.is_empty() {
            log::debug!("No previously authorised account");
            return Ok(());
        }

        self.dispatch(ConnectorEvent::ActivationStarted);
        match wallet::current_chain_id().await {
            Ok(chain_id) => {
                log::info!("Reconnected to chain {}", chain_id);
                self.dispatch(ConnectorEvent::Activated { chain_id, accounts });
                Ok(())
            }
            Err(e) => {
                self.dispatch(ConnectorEvent::ActivationFailed);
                Err(e)
            }
        }
    }

    /// Drop the local session. MetaMask keeps the page authorised, so the next
    /// eager reconnect on load picks it up again.
    pub fn deactivate(&self) {
        log::info!("Wallet disconnected");
        self.dispatch(ConnectorEvent::Disconnected);
    }

    fn listen(self) {
        let registered = wallet::subscribe(
            move |accounts| self.dispatch(ConnectorEvent::AccountsChanged(accounts)),
            move |chain_id| self.dispatch(ConnectorEvent::ChainChanged(chain_id)),
            move || self.dispatch(ConnectorEvent::Disconnected),
        );
        if !registered {
            log::warn!("No EIP-1193 provider found, wallet events disabled");
        } else if !wallet::is_metamask() {
            log::info!("Injected provider is not MetaMask, using it anyway");
        }
    }
}

impl Default for MetaMask {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_metamask() -> MetaMask {
    let connector = MetaMask::new();
    connector.listen();
    provide_context(connector);
    connector
}

pub fn use_metamask() -> MetaMask {
    expect_context::<MetaMask>()
}
