//! Money display policy.
//!
//! Prices are plain [`rust_decimal::Decimal`] values throughout the domain;
//! only the rendering is locale-dependent. `MoneyFormat` carries the symbol
//! and decimal separator so deployments outside Brazil can swap the policy
//! without touching the formatter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency rendering policy: symbol prefix plus decimal separator.
///
/// The default matches the Brazilian real ("R$ 28,00").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Symbol printed before the amount (e.g. "R$", "$").
    pub symbol: String,
    /// Character separating the integer and fraction parts.
    pub decimal_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_owned(),
            decimal_separator: ',',
        }
    }
}

impl MoneyFormat {
    /// Create a new format policy.
    #[must_use]
    pub fn new(symbol: impl Into<String>, decimal_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_separator,
        }
    }

    /// Render an amount with two fraction digits, e.g. `R$ 28,00`.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rendered = format!("{:.2}", amount.round_dp(2));
        let localized = if self.decimal_separator == '.' {
            rendered
        } else {
            rendered.replace('.', &self.decimal_separator.to_string())
        };
        format!("{} {localized}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_amounts_with_two_fraction_digits() {
        let brl = MoneyFormat::default();
        assert_eq!(brl.format(Decimal::new(2800, 2)), "R$ 28,00");
    }

    #[test]
    fn formats_fractional_amounts_with_comma_separator() {
        let brl = MoneyFormat::default();
        assert_eq!(brl.format(Decimal::new(1950, 2)), "R$ 19,50");
    }

    #[test]
    fn alternate_policy_uses_dot_separator() {
        let usd = MoneyFormat::new("$", '.');
        assert_eq!(usd.format(Decimal::new(1099, 2)), "$ 10.99");
    }
}
