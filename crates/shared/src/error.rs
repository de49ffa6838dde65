//! Application-wide error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every failure a run can hit ends up here. Only the binary entry point
/// turns one of these into a process exit.
#[derive(Debug, Error)]
pub enum AppError {
    /// An option value could not be parsed.
    #[error("Unable to parse '{value}' as {field}.")]
    InvalidArgument {
        /// Name of the option, as shown to the user (e.g. `item_cost`).
        field: &'static str,
        /// The raw value that was supplied.
        value: String,
    },

    /// A required option was not supplied.
    #[error("Missing required option '--{0}'.")]
    MissingArgument(&'static str),

    /// The command line could not be tokenized.
    #[error("Invalid command line: {0}")]
    Usage(String),

    /// The user asked for the usage text.
    #[error("Usage requested")]
    HelpRequested,

    /// The currency code is not in the catalog.
    #[error("Unable to find currency '{0}'.")]
    UnknownCurrency(String),

    /// The payment does not cover the item cost.
    #[error("Insufficient payment: a payment of {payment} does not cover an item cost of {cost}.")]
    InsufficientPayment {
        /// Item cost in major units.
        cost: Decimal,
        /// Amount tendered in major units.
        payment: Decimal,
    },

    /// The coin set could not represent the full change amount.
    #[error("Unable to make exact change in {currency}: {remaining} minor units left over.")]
    IncompleteChange {
        /// Currency code.
        currency: String,
        /// Minor units that could not be paid out.
        remaining: u64,
    },

    /// The change is too large to count out in minor units.
    #[error("Unable to make change of {amount} in {currency}: the amount is too large.")]
    UnrepresentableChange {
        /// Currency code.
        currency: String,
        /// Change owed in major units.
        amount: Decimal,
    },

    /// Configuration or catalog data is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl AppError {
    /// Returns the process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        // Every failure exits with 1.
        1
    }

    /// Returns a stable error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::MissingArgument(_) => "MISSING_ARGUMENT",
            Self::Usage(_) => "USAGE_ERROR",
            Self::HelpRequested => "HELP_REQUESTED",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::InsufficientPayment { .. } => "INSUFFICIENT_PAYMENT",
            Self::IncompleteChange { .. } => "INCOMPLETE_CHANGE",
            Self::UnrepresentableChange { .. } => "UNREPRESENTABLE_CHANGE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the usage text should follow this error.
    #[must_use]
    pub const fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::MissingArgument(_)
                | Self::Usage(_)
                | Self::HelpRequested
                | Self::UnknownCurrency(_)
        )
    }

    /// Returns the message to print on standard error, if any.
    ///
    /// A help request prints only the usage text.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::HelpRequested => None,
            other => Some(other.to_string()),
        }
    }
}
