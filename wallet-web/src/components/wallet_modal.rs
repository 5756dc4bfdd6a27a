//! Wallet Details Modal

use leptos::ev;
use leptos::prelude::*;
use shared::utils::modal_address;

use crate::utils::format::format_balance;

#[component]
pub fn WalletModal(
    open: Signal<bool>,
    on_close: Callback<()>,
    chain_name: Signal<Option<String>>,
    wallet_address: Signal<Option<String>>,
    balance: Signal<f64>,
    symbol: Signal<Option<String>>,
    coin_image: Signal<String>,
    on_deactivate: Callback<()>,
) -> impl IntoView {
    // Escape closes the dialog like a backdrop click
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="card modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="modal-title">"Wallet Details"</h2>

                    <p class="modal-label">"Your wallet is connected to:"</p>
                    <p class="modal-value">{move || chain_name.get().unwrap_or_default()}</p>

                    <p class="modal-label">"Wallet Address:"</p>
                    <p class="modal-value mono">
                        {move || wallet_address.with(|address| modal_address(address.as_deref()))}
                    </p>

                    <p class="modal-label">"You have:"</p>
                    <p class="modal-value">
                        {move || symbol.with(|s| format_balance(balance.get(), s.as_deref()))}
                        <img
                            class="coin-image"
                            src=move || coin_image.get()
                            alt=move || symbol.get().unwrap_or_default()
                        />
                    </p>

                    <div class="modal-actions">
                        <button class="btn btn-contained" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                        <button class="btn btn-outlined btn-error" on:click=move |_| on_deactivate.run(())>
                            "Disconnect"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
