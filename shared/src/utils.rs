//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! The wallet modal shows only the head of the connected account:
//! - [`truncate_address`] - First N characters followed by an ellipsis
//! - [`modal_address`] - [`truncate_address`] with the modal's 10-character prefix
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::modal_address;
//!
//! let address = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
//! assert_eq!(modal_address(Some(address)), "0x71C7656E...");
//! assert_eq!(modal_address(None), "...");
//! ```

/// Number of leading address characters shown in the wallet modal.
pub const MODAL_ADDRESS_PREFIX: usize = 10;

/// Keep the first `prefix_len` characters of `address` and append `...`.
///
/// The ellipsis is always appended, even when the address is shorter than
/// `prefix_len`, so the rendered width stays stable.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0xabcdef0123", 4), "0xab...");
/// assert_eq!(truncate_address("0xab", 4), "0xab...");
/// ```
pub fn truncate_address(address: &str, prefix_len: usize) -> String {
    let prefix: String = address.chars().take(prefix_len).collect();
    format!("{}...", prefix)
}

/// Address as rendered in the wallet modal. A missing account renders as a bare ellipsis.
pub fn modal_address(address: Option<&str>) -> String {
    truncate_address(address.unwrap_or_default(), MODAL_ADDRESS_PREFIX)
}
