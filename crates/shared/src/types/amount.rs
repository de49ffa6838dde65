//! Major-unit amount type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// A strictly positive amount expressed in major currency units (e.g., dollars).
///
/// Zero is rejected along with negatives: a sale with no cost or a payment
/// of nothing is not a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

/// Reasons a raw value cannot become an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The text is not a decimal number.
    #[error("'{0}' is not a decimal number")]
    NotNumeric(String),

    /// The value is zero or negative.
    #[error("'{0}' is not a positive amount")]
    NotPositive(Decimal),
}

impl Amount {
    /// Creates an amount, rejecting zero and negative values.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(AmountError::NotPositive(value))
        }
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s.trim()).map_err(|_| AmountError::NotNumeric(s.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1.50", dec!(1.50))]
    #[case("5", dec!(5))]
    #[case(" 3.37 ", dec!(3.37))]
    #[case("0.01", dec!(0.01))]
    fn test_parse_positive(#[case] raw: &str, #[case] expected: Decimal) {
        let amount: Amount = raw.parse().unwrap();
        assert_eq!(amount.value(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.2.3")]
    #[case("$5")]
    fn test_parse_not_numeric(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<Amount>(),
            Err(AmountError::NotNumeric(raw.to_string()))
        );
    }

    #[rstest]
    #[case("0")]
    #[case("0.00")]
    #[case("-2.50")]
    fn test_parse_not_positive(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<Amount>(),
            Err(AmountError::NotPositive(_))
        ));
    }

    #[test]
    fn test_amount_ordering() {
        let cost = Amount::new(dec!(5.00)).unwrap();
        let payment = Amount::new(dec!(3.00)).unwrap();
        assert!(payment < cost);
    }

    #[test]
    fn test_amount_display_keeps_scale() {
        let amount: Amount = "2.00".parse().unwrap();
        assert_eq!(amount.to_string(), "2.00");
    }
}
