//! Home Page - converter card, wallet modal and the session lifecycle behind them

use leptos::prelude::*;
use shared::controller::{BalanceAction, PageState};
use shared::units::wei_to_ether;

use crate::components::{ConversionCard, ThemeToggle, WalletModal};
use crate::services::wallet::LATEST_BLOCK;
use crate::state::theme::use_theme_context;
use crate::state::wallet::use_metamask;
use crate::utils::chains::chain_registry;
use crate::utils::constants::APP_TITLE;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = use_metamask();
    let theme = use_theme_context();
    let page = RwSignal::new(PageState::default());

    // Attempt to connect eagerly on mount
    leptos::task::spawn_local(async move {
        if let Err(e) = wallet.connect_eagerly().await {
            log::debug!("Eager reconnect skipped: {}", e);
        }
    });

    // Refresh the balance whenever the account list or chain changes
    Effect::new(move || {
        let (Some(provider), Some(accounts)) = (wallet.provider(), wallet.accounts()) else {
            return;
        };
        let Some(account) = accounts.into_iter().next() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = provider
                .get_balance(&account, LATEST_BLOCK)
                .await
                .map(wei_to_ether);
            let action = page.try_update(|state| state.on_balance_result(result));
            if action == Some(BalanceAction::Teardown) {
                wallet.deactivate();
            }
        });
    });

    // Losing the session always closes the modal
    Effect::new(move || {
        let active = wallet.is_active();
        page.update(|state| state.on_active_changed(active));
    });

    let display = Memo::new(move |_| chain_registry().display_info(wallet.chain_id()));

    view! {
        <div class="page" class:dark=move || theme.is_dark()>
            <header class="page-header">
                <ThemeToggle/>
            </header>

            <main class="container">
                <h1 class="app-title">{APP_TITLE}</h1>
                <ConversionCard
                    is_active=Signal::derive(move || wallet.is_active())
                    on_click_details=Callback::new(move |_: ()| page.update(|state| state.open_details()))
                />
            </main>

            <WalletModal
                open=Signal::derive(move || page.with(|state| state.modal_visible()))
                on_close=Callback::new(move |_: ()| page.update(|state| state.close_modal()))
                chain_name=Signal::derive(move || display.with(|d| d.chain_name.clone()))
                wallet_address=Signal::derive(move || {
                    wallet.accounts().and_then(|accounts| accounts.into_iter().next())
                })
                balance=Signal::derive(move || page.with(|state| state.balance()))
                symbol=Signal::derive(move || display.with(|d| d.symbol.clone()))
                coin_image=Signal::derive(move || display.with(|d| d.coin_image.clone()))
                on_deactivate=Callback::new(move |_: ()| wallet.deactivate())
            />
        </div>
    }
}
