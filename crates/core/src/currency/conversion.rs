//! Conversion between major and minor currency units.
//!
//! CRITICAL: Rounding strategy for change:
//! - Major to minor always floors (the customer is never paid a fraction
//!   of a minor unit)
//! - All arithmetic stays in `Decimal`, so 3.37 * 100 is exactly 337

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Converts a major-unit amount to whole minor units: `floor(amount * divisor)`.
///
/// Returns `None` for negative amounts or results that do not fit in `u64`.
#[must_use]
pub fn to_minor_units(amount: Decimal, divisor: u64) -> Option<u64> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return None;
    }
    amount
        .checked_mul(Decimal::from(divisor))?
        .floor()
        .to_u64()
}

/// Converts minor units back to a normalized major-unit amount.
///
/// Normalized means trailing zeros are dropped, so 50 cents is `0.5`.
/// Returns `None` when `divisor` is zero.
#[must_use]
pub fn to_major_units(minor: u64, divisor: u64) -> Option<Decimal> {
    Decimal::from(minor)
        .checked_div(Decimal::from(divisor))
        .map(|major| major.normalize())
}
