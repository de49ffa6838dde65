//! Console rendering of a settlement.

use std::fmt;

use crate::change::Settlement;
use crate::currency::Currency;

/// A settlement ready for display in a given currency.
///
/// Renders one `Name: count` line per coin, names right-aligned to the
/// longest emitted name, then a `Total Change:` line.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    settlement: &'a Settlement,
    currency: &'a Currency,
}

impl<'a> Receipt<'a> {
    /// Creates a receipt for a settlement.
    #[must_use]
    pub const fn new(settlement: &'a Settlement, currency: &'a Currency) -> Self {
        Self {
            settlement,
            currency,
        }
    }

    /// Returns the rendered lines without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let steps = &self.settlement.instructions.steps;
        let width = steps
            .iter()
            .map(|step| step.coin.name.chars().count())
            .max()
            .unwrap_or(0);

        steps
            .iter()
            .map(|step| format!("{:>width$}: {}", step.coin.name, step.count))
            .chain(std::iter::once(format!(
                "Total Change: {}",
                self.currency.format_amount(self.settlement.change)
            )))
            .collect()
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::{Sale, settle};
    use crate::currency::Coin;
    use changemaker_shared::Amount;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn usd() -> Currency {
        Currency {
            abbreviation: "USD".to_string(),
            coins: vec![
                Coin::new("Penny", 1),
                Coin::new("Nickel", 5),
                Coin::new("Dime", 10),
                Coin::new("Quarter", 25),
            ],
            format: "$<AMOUNT>".to_string(),
            divisor: 100,
        }
    }

    fn render(cost: Decimal, payment: Decimal, currency: &Currency) -> String {
        let sale = Sale::new(Amount::new(cost).unwrap(), Amount::new(payment).unwrap());
        let settlement = settle(&sale, currency).unwrap();
        Receipt::new(&settlement, currency).to_string()
    }

    #[test]
    fn test_single_coin_receipt() {
        assert_eq!(
            render(dec!(1.50), dec!(2.00), &usd()),
            "Quarter: 2\nTotal Change: $0.5\n"
        );
    }

    #[test]
    fn test_names_are_right_aligned() {
        assert_eq!(
            render(dec!(3.37), dec!(5.00), &usd()),
            "Quarter: 6\n   Dime: 1\n  Penny: 3\nTotal Change: $1.63\n"
        );
    }

    #[test]
    fn test_alignment_uses_emitted_names_only() {
        assert_eq!(
            render(dec!(1.89), dec!(2.00), &usd()),
            " Dime: 1\nPenny: 1\nTotal Change: $0.11\n"
        );
    }

    #[test]
    fn test_no_change_prints_only_total() {
        assert_eq!(render(dec!(2), dec!(2), &usd()), "Total Change: $0\n");
    }

    #[test]
    fn test_template_with_suffix() {
        let yen = Currency {
            abbreviation: "JPY".to_string(),
            coins: vec![Coin::new("100 Yen", 100), Coin::new("10 Yen", 10), Coin::new("1 Yen", 1)],
            format: "<AMOUNT> yen".to_string(),
            divisor: 1,
        };
        let sale = Sale::new(
            Amount::new(dec!(880)).unwrap(),
            Amount::new(dec!(1000)).unwrap(),
        );
        let settlement = settle(&sale, &yen).unwrap();
        assert_eq!(
            Receipt::new(&settlement, &yen).lines(),
            vec!["100 Yen: 1", " 10 Yen: 2", "Total Change: 120 yen"]
        );
    }
}
