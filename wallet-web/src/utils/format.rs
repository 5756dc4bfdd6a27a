//! # Formatting Utilities for the Wallet Modal
//!
//! - [`format_balance`] - Balance followed by the native currency symbol
//!
//! Amount rounding for the converter lives in [`shared::conversion::format_amount`];
//! address truncation in [`shared::utils::modal_address`].

/// Format a display-unit balance with its symbol.
///
/// The balance is printed with the shortest representation that round-trips,
/// so `1.0` renders as `1` and small balances keep all their digits. A chain
/// missing from the metadata has no symbol.
///
/// # Examples
///
/// ```rust
/// use coinverter_web::utils::format::format_balance;
///
/// assert_eq!(format_balance(1.0, Some("ETH")), "1 ETH");
/// assert_eq!(format_balance(0.000123, Some("tBNB")), "0.000123 tBNB");
/// assert_eq!(format_balance(2.5, None), "2.5");
/// ```
pub fn format_balance(balance: f64, symbol: Option<&str>) -> String {
    match symbol {
        Some(symbol) if !symbol.is_empty() => format!("{} {}", balance, symbol),
        _ => balance.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(0.0, Some("ETH")), "0 ETH");
        assert_eq!(format_balance(12.345, Some("MATIC")), "12.345 MATIC");
    }

    #[test]
    fn test_format_balance_without_symbol() {
        assert_eq!(format_balance(3.0, None), "3");
        assert_eq!(format_balance(3.0, Some("")), "3");
    }
}
