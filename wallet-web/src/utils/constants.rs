//! Application constants

pub const APP_TITLE: &str = "Coinverter";

/// Local storage key of the dark mode flag
pub const DARK_MODE_KEY: &str = "isDarkMode";

/// Id of the static loading placeholder in index.html
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

pub const WALLET_NAME: &str = "MetaMask";
pub const METAMASK_DOWNLOAD_URL: &str = "https://metamask.io/download/";
