//! Light/dark switch

use leptos::prelude::*;

use crate::state::theme::use_theme_context;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="btn theme-toggle"
            aria-label=move || if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
