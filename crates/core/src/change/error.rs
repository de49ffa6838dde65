//! Settlement error types.

use changemaker_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while settling a sale.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeError {
    /// The payment is less than the item cost.
    #[error("Insufficient payment: {payment} does not cover {cost}")]
    InsufficientPayment {
        /// Item cost in major units.
        cost: Decimal,
        /// Amount tendered in major units.
        payment: Decimal,
    },

    /// The change amount cannot be expressed in minor units.
    #[error("Change of {amount} cannot be expressed in minor units of {currency}")]
    UnrepresentableAmount {
        /// Currency code.
        currency: String,
        /// Change in major units.
        amount: Decimal,
    },

    /// The coins left part of the change unpaid.
    #[error("Unable to make exact change in {currency}: {remaining} minor units left over")]
    IncompleteChange {
        /// Currency code.
        currency: String,
        /// Minor units the coins could not represent.
        remaining: u64,
    },
}

impl ChangeError {
    /// Returns the error code for logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPayment { .. } => "INSUFFICIENT_PAYMENT",
            Self::UnrepresentableAmount { .. } => "UNREPRESENTABLE_AMOUNT",
            Self::IncompleteChange { .. } => "INCOMPLETE_CHANGE",
        }
    }
}

impl From<ChangeError> for AppError {
    fn from(err: ChangeError) -> Self {
        match err {
            ChangeError::InsufficientPayment { cost, payment } => {
                Self::InsufficientPayment { cost, payment }
            }
            ChangeError::IncompleteChange {
                currency,
                remaining,
            } => Self::IncompleteChange {
                currency,
                remaining,
            },
            ChangeError::UnrepresentableAmount { currency, amount } => {
                Self::UnrepresentableChange { currency, amount }
            }
        }
    }
}
