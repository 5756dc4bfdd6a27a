//! Dark mode preference, persisted in local storage

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::utils::constants::DARK_MODE_KEY;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Read the stored flag; anything missing or unreadable means light mode.
    pub fn load() -> Self {
        let dark = LocalStorage::get::<bool>(DARK_MODE_KEY).unwrap_or(false);
        Self {
            dark: RwSignal::new(dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn toggle(&self) {
        self.dark.update(|dark| *dark = !*dark);
        let dark = self.dark.get_untracked();
        if let Err(e) = LocalStorage::set(DARK_MODE_KEY, dark) {
            log::warn!("Could not persist dark mode preference: {}", e);
        }
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let context = ThemeContext::load();
    provide_context(context);
    context
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
