//! Settling a sale: from cost and payment to change instructions.

use changemaker_shared::Amount;
use rust_decimal::Decimal;

use super::engine::{ChangeEngine, ChangeInstructions};
use super::error::ChangeError;
use crate::currency::{Currency, to_major_units, to_minor_units};

/// A single point-of-sale transaction in major units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sale {
    /// Cost of the item.
    pub item_cost: Amount,
    /// Amount tendered.
    pub payment: Amount,
}

impl Sale {
    /// Creates a new sale.
    #[must_use]
    pub const fn new(item_cost: Amount, payment: Amount) -> Self {
        Self { item_cost, payment }
    }
}

/// The outcome of a settled sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Change owed in minor units.
    pub change_minor: u64,
    /// Change owed in major units, normalized (e.g., `0.5`).
    pub change: Decimal,
    /// Coins to hand back.
    pub instructions: ChangeInstructions,
}

/// Settles a sale in the given currency.
///
/// The change is `floor((payment - cost) * divisor)` minor units, split into
/// coins by [`ChangeEngine::make_change`]. The difference is taken in exact
/// decimals before flooring, so inputs finer than a minor unit are not
/// floored one by one: cost 1.005 and payment 2 owe 99 cents, not 100.
///
/// # Errors
///
/// - [`ChangeError::InsufficientPayment`] if the payment is below the cost
/// - [`ChangeError::IncompleteChange`] if the coins cannot represent the change
/// - [`ChangeError::UnrepresentableAmount`] if the change overflows minor units
pub fn settle(sale: &Sale, currency: &Currency) -> Result<Settlement, ChangeError> {
    let cost = sale.item_cost.value();
    let payment = sale.payment.value();
    if payment < cost {
        return Err(ChangeError::InsufficientPayment { cost, payment });
    }

    let owed = payment - cost;
    let unrepresentable = || ChangeError::UnrepresentableAmount {
        currency: currency.abbreviation.clone(),
        amount: owed,
    };

    let change_minor = to_minor_units(owed, currency.divisor).ok_or_else(unrepresentable)?;
    let instructions = ChangeEngine::make_change(change_minor, &currency.coins);
    if !instructions.is_exact() {
        return Err(ChangeError::IncompleteChange {
            currency: currency.abbreviation.clone(),
            remaining: instructions.remainder,
        });
    }
    let change = to_major_units(change_minor, currency.divisor).ok_or_else(unrepresentable)?;

    tracing::debug!(
        currency = %currency.abbreviation,
        change_minor,
        coins = instructions.coin_count(),
        "Settled sale"
    );

    Ok(Settlement {
        change_minor,
        change,
        instructions,
    })
}
