//! # NEP/BUSD Conversion
//!
//! Two amount fields bound by a fixed rate: editing either one recomputes the
//! other to two decimal places. Invalid text never raises an error, it only
//! flags the edited field so the card can swap its helper text.
//!
//! ```rust
//! use shared::conversion::ConversionPair;
//!
//! let mut pair = ConversionPair::default();
//! pair.set_target("9");
//! assert_eq!(pair.source(), "3.00");
//!
//! pair.set_source("abc");
//! assert!(pair.is_source_invalid());
//! assert_eq!(pair.target(), "9");
//! ```

/// BUSD received for one NEP.
pub const RATE: f64 = 3.0;

pub const SOURCE_SYMBOL: &str = "NEP";
pub const TARGET_SYMBOL: &str = "BUSD";

pub const SOURCE_HELPER: &str = "1 NEP = 3 BUSD";
pub const TARGET_HELPER: &str = "3 BUSD = 1 NEP";
pub const INVALID_HELPER: &str = "Please enter a valid number";

/// Parse user input as a finite amount. Surrounding whitespace is ignored.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Digits needed to print any `f64` without rounding.
const EXACT_DIGITS: usize = 1100;

/// Round to two decimals for display.
///
/// Rounds half away from zero on the exact decimal value of `value`, so
/// `0.125` becomes `0.13`. Small negative amounts keep their sign (`-0.00`),
/// negative zero does not.
pub fn format_amount(value: f64) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    // The expansion is exact, so a third digit of 5 or more is at least half a cent
    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().map(|&d| char::from(d)).collect();
    let cents: String = digits[split..].iter().map(|&d| char::from(d)).collect();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, whole, cents)
}

/// State of one amount field.
#[derive(Debug, Clone, Default, PartialEq)]
enum Field {
    /// Never edited nor computed.
    #[default]
    Untouched,
    Text(String),
}

impl Field {
    fn text(&self) -> &str {
        match self {
            Field::Untouched => "",
            Field::Text(text) => text,
        }
    }

    fn is_invalid(&self) -> bool {
        match self {
            Field::Untouched => false,
            Field::Text(text) => parse_amount(text).is_none(),
        }
    }
}

/// The source (NEP) and target (BUSD) fields of the conversion card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionPair {
    source: Field,
    target: Field,
}

impl ConversionPair {
    /// Record an edit of the source field and recompute the target from it.
    pub fn set_source(&mut self, input: &str) {
        self.source = Field::Text(input.to_string());
        if let Some(amount) = parse_amount(input) {
            self.target = Field::Text(format_amount(amount * RATE));
        }
    }

    /// Record an edit of the target field and recompute the source from it.
    pub fn set_target(&mut self, input: &str) {
        self.target = Field::Text(input.to_string());
        if let Some(amount) = parse_amount(input) {
            self.source = Field::Text(format_amount(amount / RATE));
        }
    }

    pub fn source(&self) -> &str {
        self.source.text()
    }

    pub fn target(&self) -> &str {
        self.target.text()
    }

    pub fn is_source_invalid(&self) -> bool {
        self.source.is_invalid()
    }

    pub fn is_target_invalid(&self) -> bool {
        self.target.is_invalid()
    }

    pub fn source_helper(&self) -> &'static str {
        if self.is_source_invalid() {
            INVALID_HELPER
        } else {
            SOURCE_HELPER
        }
    }

    pub fn target_helper(&self) -> &'static str {
        if self.is_target_invalid() {
            INVALID_HELPER
        } else {
            TARGET_HELPER
        }
    }
}
