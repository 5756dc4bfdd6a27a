//! # Page Controller
//!
//! Display state owned by the Coinverter page: whether the wallet modal is open
//! and which balance it shows. The web app keeps one [`PageState`] in a signal
//! and routes connector changes and balance lookups through it.
//!
//! ## Rules
//!
//! - The modal opens only on request and closes on request.
//! - Losing the active flag closes the modal, whatever it showed before.
//! - A failed balance lookup shows a zero balance. When the failure reports a
//!   network change, the modal closes and the caller must deactivate the session
//!   ([`BalanceAction::Teardown`]).
//!
//! Balance lookups are not sequenced: whichever result arrives last is shown.

use log::{debug, warn};

use crate::error::BalanceError;

/// What the caller must do after a balance result has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAction {
    Keep,
    Teardown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    modal_visible: bool,
    balance: f64,
}

impl PageState {
    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn open_details(&mut self) {
        self.modal_visible = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_visible = false;
    }

    pub fn on_active_changed(&mut self, active: bool) {
        if !active {
            self.modal_visible = false;
        }
    }

    pub fn on_balance_result(&mut self, result: Result<f64, BalanceError>) -> BalanceAction {
        match result {
            Ok(balance) => {
                debug!("Balance updated: {}", balance);
                self.balance = balance;
                BalanceAction::Keep
            }
            Err(err) => {
                self.balance = 0.0;
                if err.is_network_changed() {
                    warn!("Balance lookup aborted, tearing down session: {}", err);
                    self.modal_visible = false;
                    BalanceAction::Teardown
                } else {
                    warn!("Balance lookup failed: {}", err);
                    BalanceAction::Keep
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ConnectorEvent, WalletState};

    fn opened() -> PageState {
        let mut state = PageState::default();
        state.open_details();
        state
    }

    #[test]
    fn test_modal_open_close() {
        let mut state = PageState::default();
        assert!(!state.modal_visible());
        state.open_details();
        assert!(state.modal_visible());
        state.close_modal();
        assert!(!state.modal_visible());
    }

    #[test]
    fn test_inactive_hides_modal_regardless_of_prior_value() {
        for mut state in [PageState::default(), opened()] {
            state.on_active_changed(false);
            assert!(!state.modal_visible());
        }
    }

    #[test]
    fn test_active_does_not_open_modal() {
        let mut state = PageState::default();
        state.on_active_changed(true);
        assert!(!state.modal_visible());

        let mut state = opened();
        state.on_active_changed(true);
        assert!(state.modal_visible());
    }

    #[test]
    fn test_balance_success() {
        let mut state = opened();
        assert_eq!(state.on_balance_result(Ok(1.25)), BalanceAction::Keep);
        assert_eq!(state.balance(), 1.25);
        assert!(state.modal_visible());
    }

    #[test]
    fn test_balance_failure_keeps_session() {
        let mut state = opened();
        state.on_balance_result(Ok(4.0));

        let action = state.on_balance_result(Err(BalanceError::Rpc("timeout".to_string())));
        assert_eq!(action, BalanceAction::Keep);
        assert_eq!(state.balance(), 0.0);
        assert!(state.modal_visible());
    }

    #[test]
    fn test_network_change_tears_down() {
        let mut state = opened();
        state.on_balance_result(Ok(4.0));

        let action = state.on_balance_result(Err(BalanceError::NetworkChanged {
            expected: 1,
            actual: 97,
        }));
        assert_eq!(action, BalanceAction::Teardown);
        assert_eq!(state.balance(), 0.0);
        assert!(!state.modal_visible());
    }

    #[test]
    fn test_wallet_reported_network_change_tears_down() {
        let mut state = opened();
        let action = state.on_balance_result(Err(BalanceError::Rpc(
            "could not detect network: underlying network changed".to_string(),
        )));
        assert_eq!(action, BalanceAction::Teardown);
        assert!(!state.modal_visible());
    }

    #[test]
    fn test_last_result_wins() {
        let mut state = PageState::default();
        state.on_balance_result(Ok(2.0));
        state.on_balance_result(Ok(0.5));
        assert_eq!(state.balance(), 0.5);
    }

    #[test]
    fn test_teardown_deactivates_session() {
        let mut wallet = WalletState::Disconnected
            .apply(ConnectorEvent::ActivationStarted)
            .apply(ConnectorEvent::Activated {
                chain_id: 1,
                accounts: vec!["0x1234567890abcdef1234567890abcdef12345678".to_string()],
            });
        let mut state = opened();
        state.on_active_changed(wallet.is_active());
        state.on_balance_result(Ok(4.0));

        let action = state.on_balance_result(Err(BalanceError::NetworkChanged {
            expected: 1,
            actual: 97,
        }));
        if action == BalanceAction::Teardown {
            wallet = wallet.apply(ConnectorEvent::Disconnected);
        }
        state.on_active_changed(wallet.is_active());

        assert_eq!(action, BalanceAction::Teardown);
        assert!(!wallet.is_active());
        assert_eq!(wallet.first_account(), None);
        assert!(!state.modal_visible());
        assert_eq!(state.balance(), 0.0);
    }

    #[test]
    fn test_rpc_failure_keeps_session_active() {
        let mut wallet = WalletState::Disconnected.apply(ConnectorEvent::Activated {
            chain_id: 97,
            accounts: vec!["0xabc".to_string()],
        });
        let mut state = opened();

        let action = state.on_balance_result(Err(BalanceError::Rpc("timeout".to_string())));
        if action == BalanceAction::Teardown {
            wallet = wallet.apply(ConnectorEvent::Disconnected);
        }
        state.on_active_changed(wallet.is_active());

        assert!(wallet.is_active());
        assert!(state.modal_visible());
    }
}
