//! Property-based tests for unit conversion.
//!
//! - Property 1: Floor Conversion Never Over-Pays
//! - Property 2: Minor/Major Round Trip

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{to_major_units, to_minor_units};

/// Strategy to generate amounts with 0 to 4 decimal places (up to 1,000,000).
fn major_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64, 0u32..=4).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy to generate realistic divisors.
fn divisor() -> impl Strategy<Value = u64> {
    prop_oneof![Just(1u64), Just(100u64), Just(1000u64)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 1: Converting to minor units never yields more than the exact value,
    /// and never loses a whole minor unit.
    #[test]
    fn prop_to_minor_units_is_floor(
        amount in major_amount(),
        divisor in divisor(),
    ) {
        let minor = to_minor_units(amount, divisor).unwrap();
        let exact = amount * Decimal::from(divisor);
        let minor = Decimal::from(minor);
        prop_assert!(minor <= exact, "{} should not exceed {}", minor, exact);
        prop_assert!(exact - minor < Decimal::ONE, "{} lost a whole unit of {}", minor, exact);
    }

    /// Property 2: Whole minor-unit amounts survive a round trip through major units.
    #[test]
    fn prop_minor_major_round_trip(
        minor in 0u64..1_000_000_000,
        divisor in divisor(),
    ) {
        let major = to_major_units(minor, divisor).unwrap();
        prop_assert_eq!(to_minor_units(major, divisor), Some(minor));
    }
}
