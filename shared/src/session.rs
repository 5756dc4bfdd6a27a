//! # Wallet Session
//!
//! The page observes a wallet session through four accessors: chain id,
//! accounts, active flag and an RPC provider. [`WalletState`] holds the first
//! three; the provider is derived from the chain id by the web app.
//!
//! State changes arrive as [`ConnectorEvent`]s, either from a user action
//! (connect, disconnect) or from the wallet extension (account or chain
//! switch), and are folded in with [`WalletState::apply`].
//!
//! ```text
//!                ActivationStarted              Activated
//! Disconnected ───────────────────▶ Connecting ───────────▶ Connected
//!      ▲                                │                       │
//!      └──── ActivationFailed ──────────┘                       │
//!      └──── Disconnected / AccountsChanged([]) ────────────────┘
//! ```

/// Connection state of the browser wallet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected { chain_id: u64, accounts: Vec<String> },
}

/// Something that happened to the wallet session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorEvent {
    ActivationStarted,
    Activated { chain_id: u64, accounts: Vec<String> },
    ActivationFailed,
    AccountsChanged(Vec<String>),
    ChainChanged(u64),
    Disconnected,
}

impl WalletState {
    pub fn is_active(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting)
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            WalletState::Connected { chain_id, .. } => Some(*chain_id),
            _ => None,
        }
    }

    pub fn accounts(&self) -> Option<&[String]> {
        match self {
            WalletState::Connected { accounts, .. } => Some(accounts),
            _ => None,
        }
    }

    pub fn first_account(&self) -> Option<&str> {
        self.accounts()
            .and_then(|accounts| accounts.first())
            .map(String::as_str)
    }

    /// Fold `event` into the state.
    ///
    /// Wallet-originated events (account or chain switches) only affect an
    /// active session; a disconnected page ignores them until the user
    /// connects again.
    pub fn apply(self, event: ConnectorEvent) -> WalletState {
        match (self, event) {
            (_, ConnectorEvent::Disconnected) => WalletState::Disconnected,

            // A second prompt while connected does not reset the session
            (state @ WalletState::Connected { .. }, ConnectorEvent::ActivationStarted) => state,
            (_, ConnectorEvent::ActivationStarted) => WalletState::Connecting,

            (_, ConnectorEvent::Activated { accounts, .. }) if accounts.is_empty() => {
                WalletState::Disconnected
            }
            (_, ConnectorEvent::Activated { chain_id, accounts }) => {
                WalletState::Connected { chain_id, accounts }
            }

            (WalletState::Connecting, ConnectorEvent::ActivationFailed) => {
                WalletState::Disconnected
            }
            (state, ConnectorEvent::ActivationFailed) => state,

            (WalletState::Connected { .. }, ConnectorEvent::AccountsChanged(accounts))
                if accounts.is_empty() =>
            {
                WalletState::Disconnected
            }
            (WalletState::Connected { chain_id, .. }, ConnectorEvent::AccountsChanged(accounts)) => {
                WalletState::Connected { chain_id, accounts }
            }

            (WalletState::Connected { accounts, .. }, ConnectorEvent::ChainChanged(chain_id)) => {
                WalletState::Connected { chain_id, accounts }
            }

            (state, ConnectorEvent::AccountsChanged(_) | ConnectorEvent::ChainChanged(_)) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
    const BOB: &str = "0x0000000000000000000000000000000000000b0b";

    fn connected(chain_id: u64) -> WalletState {
        WalletState::Connected {
            chain_id,
            accounts: vec![ALICE.to_string()],
        }
    }

    #[test]
    fn test_default_is_disconnected() {
        let state = WalletState::default();
        assert!(!state.is_active());
        assert_eq!(state.chain_id(), None);
        assert_eq!(state.accounts(), None);
        assert_eq!(state.first_account(), None);
    }

    #[test]
    fn test_activation_flow() {
        let state = WalletState::default().apply(ConnectorEvent::ActivationStarted);
        assert!(state.is_connecting());
        assert!(!state.is_active());

        let state = state.apply(ConnectorEvent::Activated {
            chain_id: 56,
            accounts: vec![ALICE.to_string(), BOB.to_string()],
        });
        assert!(state.is_active());
        assert_eq!(state.chain_id(), Some(56));
        assert_eq!(state.first_account(), Some(ALICE));
    }

    #[test]
    fn test_activation_failure_returns_to_disconnected() {
        let state = WalletState::Connecting.apply(ConnectorEvent::ActivationFailed);
        assert_eq!(state, WalletState::Disconnected);

        // A failed second prompt keeps the live session
        let state = connected(1).apply(ConnectorEvent::ActivationFailed);
        assert_eq!(state, connected(1));
    }

    #[test]
    fn test_activation_without_accounts_is_not_active() {
        let state = WalletState::Connecting.apply(ConnectorEvent::Activated {
            chain_id: 1,
            accounts: vec![],
        });
        assert_eq!(state, WalletState::Disconnected);
    }

    #[test]
    fn test_second_prompt_keeps_session() {
        let state = connected(1).apply(ConnectorEvent::ActivationStarted);
        assert_eq!(state, connected(1));
    }

    #[test]
    fn test_chain_and_account_switches() {
        let state = connected(1).apply(ConnectorEvent::ChainChanged(97));
        assert_eq!(state.chain_id(), Some(97));
        assert_eq!(state.first_account(), Some(ALICE));

        let state = state.apply(ConnectorEvent::AccountsChanged(vec![BOB.to_string()]));
        assert_eq!(state.chain_id(), Some(97));
        assert_eq!(state.first_account(), Some(BOB));
    }

    #[test]
    fn test_empty_accounts_tears_down() {
        let state = connected(1).apply(ConnectorEvent::AccountsChanged(vec![]));
        assert_eq!(state, WalletState::Disconnected);
    }

    #[test]
    fn test_wallet_events_ignored_while_disconnected() {
        let state = WalletState::Disconnected
            .apply(ConnectorEvent::ChainChanged(5))
            .apply(ConnectorEvent::AccountsChanged(vec![ALICE.to_string()]));
        assert_eq!(state, WalletState::Disconnected);
    }

    #[test]
    fn test_disconnect_from_any_state() {
        for state in [WalletState::Disconnected, WalletState::Connecting, connected(1)] {
            assert_eq!(
                state.apply(ConnectorEvent::Disconnected),
                WalletState::Disconnected
            );
        }
    }
}
