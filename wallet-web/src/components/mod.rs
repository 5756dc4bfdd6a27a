//! UI Components

pub mod conversion_card;
pub mod theme_toggle;
pub mod wallet_modal;

pub use conversion_card::ConversionCard;
pub use theme_toggle::ThemeToggle;
pub use wallet_modal::WalletModal;
