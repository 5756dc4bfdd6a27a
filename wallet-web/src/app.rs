//! Coinverter Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::HomePage;
use crate::state::theme::provide_theme_context;
use crate::state::wallet::provide_metamask;

#[component]
pub fn App() -> impl IntoView {
    provide_metamask();
    provide_theme_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <main class="container">
                <div class="card not-found">
                    <h1 class="card-title">"404 - Page Not Found"</h1>
                    <p>"The page you're looking for doesn't exist."</p>
                    <A href="/">
                        <span class="btn btn-contained">"Go to the converter"</span>
                    </A>
                </div>
            </main>
        </div>
    }
}
