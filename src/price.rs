//! Price override normalization
//!
//! Override prices arrive either as numbers or as currency-formatted text
//! (`"$1,234.50"`, `"€80,50"`). Anything that cannot be read degrades to `None`;
//! the value only feeds a suggested-price display, never a charge.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A raw price as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// Already numeric; passed through unchanged
    Amount(f64),
    /// Currency-formatted text
    Text(String),
}

impl PriceInput {
    /// Numeric value of this price, if one can be read
    pub fn normalize(&self) -> Option<f64> {
        match self {
            PriceInput::Amount(amount) => Some(*amount),
            PriceInput::Text(text) => {
                let parsed = parse_price_text(text);
                if parsed.is_none() {
                    debug!(text = text.as_str(), "price text has no numeric value");
                }
                parsed
            }
        }
    }
}

/// Normalize an optional price; absent prices stay absent
pub fn normalize_price(price: Option<&PriceInput>) -> Option<f64> {
    price.and_then(PriceInput::normalize)
}

impl From<f64> for PriceInput {
    fn from(amount: f64) -> Self {
        PriceInput::Amount(amount)
    }
}

impl From<i64> for PriceInput {
    fn from(amount: i64) -> Self {
        PriceInput::Amount(amount as f64)
    }
}

impl From<&str> for PriceInput {
    fn from(text: &str) -> Self {
        PriceInput::Text(text.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(text: String) -> Self {
        PriceInput::Text(text)
    }
}

/// Plain numbers become [`PriceInput::Amount`], everything else is kept as text
impl FromStr for PriceInput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => PriceInput::Amount(amount),
            _ => PriceInput::Text(s.to_string()),
        })
    }
}

/// Keep digits, commas and periods, then read the leading number.
///
/// With a period present, commas are thousands separators (`"1,234.56"`);
/// otherwise a comma is the decimal mark (`"80,50"`).
fn parse_price_text(text: &str) -> Option<f64> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let cleaned = if kept.contains('.') {
        kept.replace(',', "")
    } else {
        kept.replace(',', ".")
    };

    leading_number(&cleaned)
}

/// Longest prefix of digits with at most one period
fn leading_number(s: &str) -> Option<f64> {
    let mut seen_period = false;
    let end = s
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' && !seen_period {
                seen_period = true;
                false
            } else {
                !c.is_ascii_digit()
            }
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let prefix = &s[..end];
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<f64> {
        PriceInput::from(s).normalize()
    }

    #[test]
    fn test_currency_formatted() {
        assert_eq!(text("$1,234.56"), Some(1234.56));
        assert_eq!(text("USD 99"), Some(99.0));
        assert_eq!(text("$80 / night"), Some(80.0));
        assert_eq!(text(" 120.00 "), Some(120.0));
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(text("€80,50"), Some(80.5));
        // No period, so the comma is read as a decimal mark
        assert_eq!(text("1,234"), Some(1.234));
    }

    #[test]
    fn test_repeated_periods_stop_at_second() {
        assert_eq!(text("1.234.56"), Some(1.234));
    }

    #[test]
    fn test_unreadable_text() {
        assert_eq!(text("N/A"), None);
        assert_eq!(text(""), None);
        assert_eq!(text("."), None);
        assert_eq!(text("free"), None);
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(PriceInput::from(1234.56).normalize(), Some(1234.56));
        assert_eq!(PriceInput::from(80_i64).normalize(), Some(80.0));
    }

    #[test]
    fn test_absent_price() {
        assert_eq!(normalize_price(None), None);
        assert_eq!(normalize_price(Some(&PriceInput::from("$15"))), Some(15.0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("80".parse::<PriceInput>().unwrap(), PriceInput::Amount(80.0));
        assert_eq!(
            "$1,234.56".parse::<PriceInput>().unwrap(),
            PriceInput::Text("$1,234.56".to_string())
        );
        assert_eq!(
            "NaN".parse::<PriceInput>().unwrap(),
            PriceInput::Text("NaN".to_string())
        );
    }

    #[test]
    fn test_untagged_deserialize() {
        let amount: PriceInput = serde_json::from_str("80").unwrap();
        assert_eq!(amount, PriceInput::Amount(80.0));

        let text: PriceInput = serde_json::from_str("\"$80\"").unwrap();
        assert_eq!(text, PriceInput::Text("$80".to_string()));
    }
}
