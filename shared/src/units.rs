//! # Unit Conversion
//!
//! EIP-1193 wallets report numbers as `0x`-prefixed hex quantities in the
//! chain's smallest unit. These helpers decode them and scale them to the
//! display unit without going through floating point until the very end.
//!
//! ```rust
//! use shared::units::{parse_quantity, format_units, wei_to_ether};
//!
//! let wei = parse_quantity("0xde0b6b3a7640000").unwrap();
//! assert_eq!(format_units(wei, 18), "1");
//! assert_eq!(wei_to_ether(wei), 1.0);
//! ```

use std::num::IntErrorKind;

use crate::error::UnitsError;

/// Decimals of the native asset on Ethereum-like chains (1 ether = 10^18 wei).
pub const ETHER_DECIMALS: u32 = 18;

/// Decode a hex quantity such as `"0x1bc16d674ec80000"`.
pub fn parse_quantity(quantity: &str) -> Result<u128, UnitsError> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| UnitsError::MissingPrefix(quantity.to_string()))?;

    if digits.is_empty() {
        return Err(UnitsError::Empty(quantity.to_string()));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(UnitsError::InvalidDigit(quantity.to_string()));
    }

    u128::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => UnitsError::Overflow {
            value: quantity.to_string(),
            bits: u128::BITS,
        },
        _ => UnitsError::InvalidDigit(quantity.to_string()),
    })
}

/// Decode a hex chain id such as `"0x38"`.
pub fn parse_chain_id(quantity: &str) -> Result<u64, UnitsError> {
    let value = parse_quantity(quantity)?;
    u64::try_from(value).map_err(|_| UnitsError::Overflow {
        value: quantity.to_string(),
        bits: u64::BITS,
    })
}

/// Render `value` smallest units as an exact decimal string with `decimals`
/// fractional digits, trailing zeros trimmed.
pub fn format_units(value: u128, decimals: u32) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{:0>width$}", digits, width = decimals + 1)
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

/// Convert smallest units to a display amount.
pub fn to_display_units(value: u128, decimals: u32) -> f64 {
    // format_units only ever yields digits and at most one '.'
    format_units(value, decimals).parse().unwrap_or_default()
}

/// Convert wei to ether.
pub fn wei_to_ether(wei: u128) -> f64 {
    to_display_units(wei, ETHER_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0"), Ok(0));
        assert_eq!(parse_quantity("0x38"), Ok(56));
        assert_eq!(parse_quantity("0X1BC16D674EC80000"), Ok(2_000_000_000_000_000_000));
    }

    #[test]
    fn test_parse_quantity_rejects_malformed() {
        assert_eq!(
            parse_quantity("123"),
            Err(UnitsError::MissingPrefix("123".to_string()))
        );
        assert_eq!(parse_quantity("0x"), Err(UnitsError::Empty("0x".to_string())));
        assert_eq!(
            parse_quantity("0x+1"),
            Err(UnitsError::InvalidDigit("0x+1".to_string()))
        );
        assert_eq!(
            parse_quantity("0xzz"),
            Err(UnitsError::InvalidDigit("0xzz".to_string()))
        );
    }

    #[test]
    fn test_parse_quantity_overflow() {
        let too_big = format!("0x1{}", "0".repeat(32));
        assert!(matches!(
            parse_quantity(&too_big),
            Err(UnitsError::Overflow { bits: 128, .. })
        ));
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1"), Ok(1));
        assert_eq!(parse_chain_id("0x61"), Ok(97));
        assert!(matches!(
            parse_chain_id("0x10000000000000000"),
            Err(UnitsError::Overflow { bits: 64, .. })
        ));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(0, 18), "0");
        assert_eq!(format_units(1_000_000_000_000_000_000, 18), "1");
        assert_eq!(format_units(1_500_000_000_000_000_000, 18), "1.5");
        assert_eq!(format_units(1, 18), "0.000000000000000001");
        assert_eq!(format_units(123_456, 3), "123.456");
        assert_eq!(format_units(42, 0), "42");
    }

    #[test]
    fn test_wei_to_ether() {
        assert_eq!(wei_to_ether(0), 0.0);
        assert_eq!(wei_to_ether(250_000_000_000_000_000), 0.25);
        assert_eq!(wei_to_ether(12_345_000_000_000_000_000), 12.345);
    }
}
