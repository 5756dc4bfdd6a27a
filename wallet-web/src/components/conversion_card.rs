//! Conversion Card - NEP/BUSD converter with the wallet entry point

use leptos::prelude::*;
use shared::conversion::{ConversionPair, SOURCE_SYMBOL, TARGET_SYMBOL};

use crate::services::wallet::WalletError;
use crate::state::wallet::use_metamask;
use crate::utils::constants::{METAMASK_DOWNLOAD_URL, WALLET_NAME};

#[component]
pub fn ConversionCard(is_active: Signal<bool>, on_click_details: Callback<()>) -> impl IntoView {
    let wallet = use_metamask();
    let pair = RwSignal::new(ConversionPair::default());
    let (connect_error, set_connect_error) = signal(None::<WalletError>);

    let connect = move |_: leptos::ev::MouseEvent| {
        set_connect_error.set(None);
        leptos::task::spawn_local(async move {
            if let Err(e) = wallet.activate().await {
                set_connect_error.set(Some(e));
            }
        });
    };

    view! {
        <div class="card conversion-card">
            <h2 class="card-title">"Convert NEP to BUSD"</h2>

            <div class="conversion-grid">
                <AmountField
                    label=SOURCE_SYMBOL
                    value=Signal::derive(move || pair.with(|p| p.source().to_string()))
                    invalid=Signal::derive(move || pair.with(|p| p.is_source_invalid()))
                    helper=Signal::derive(move || pair.with(|p| p.source_helper()))
                    on_input=Callback::new(move |value: String| pair.update(|p| p.set_source(&value)))
                />
                <div class="conversion-icon" aria-hidden="true">"⇄"</div>
                <AmountField
                    label=TARGET_SYMBOL
                    value=Signal::derive(move || pair.with(|p| p.target().to_string()))
                    invalid=Signal::derive(move || pair.with(|p| p.is_target_invalid()))
                    helper=Signal::derive(move || pair.with(|p| p.target_helper()))
                    on_input=Callback::new(move |value: String| pair.update(|p| p.set_target(&value)))
                />
            </div>

            <div class="card-actions">
                <Show
                    when=move || is_active.get()
                    fallback=move || view! {
                        <button
                            class="btn btn-outlined"
                            disabled=move || wallet.is_activating()
                            on:click=connect
                        >
                            {format!("Connect with {}", WALLET_NAME)}
                        </button>
                    }
                >
                    <button class="btn btn-contained" on:click=move |_| on_click_details.run(())>
                        "Wallet Details"
                    </button>
                </Show>
            </div>

            {move || connect_error.get().map(|e| match e {
                WalletError::NotInstalled => view! {
                    <p class="error-text">
                        {format!("{} was not detected. ", WALLET_NAME)}
                        <a href=METAMASK_DOWNLOAD_URL target="_blank" rel="noopener">"Install it"</a>
                    </p>
                }.into_any(),
                other => view! { <p class="error-text">{other.to_string()}</p> }.into_any(),
            })}
        </div>
    }
}

/// Labelled number input with a helper line that turns into an error message.
#[component]
fn AmountField(
    label: &'static str,
    value: Signal<String>,
    invalid: Signal<bool>,
    helper: Signal<&'static str>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = format!("amount-{}", label.to_lowercase());

    view! {
        <div class="field" class:invalid=move || invalid.get()>
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type="number"
                inputmode="decimal"
                pattern="[0-9]*"
                aria-invalid=move || invalid.get().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <p class="helper-text">{move || helper.get()}</p>
        </div>
    }
}
