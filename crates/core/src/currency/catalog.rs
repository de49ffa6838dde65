//! Currency definitions and the read-only catalog they live in.
//!
//! The catalog is decoded from a JSON array of currency objects. Decoding is
//! explicit: the file is first read into untyped JSON values, then each
//! field is type-checked and validated so that a bad file is reported with the
//! path of the offending field instead of being trusted as-is.

use std::collections::HashSet;
use std::path::Path;

use changemaker_shared::AppError;
use serde_json::{Map, Value};
use thiserror::Error;

/// Placeholder substituted with the major-unit amount in a currency format.
pub const AMOUNT_PLACEHOLDER: &str = "<AMOUNT>";

/// A single coin denomination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    /// Display name (e.g., "Quarter").
    pub name: String,
    /// Denomination in minor units (e.g., 25 for a US quarter).
    pub value: u64,
}

impl Coin {
    /// Creates a new coin.
    #[must_use]
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A currency definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// Currency code (e.g., "USD").
    pub abbreviation: String,
    /// Coin denominations. Order is irrelevant.
    pub coins: Vec<Coin>,
    /// Display template containing [`AMOUNT_PLACEHOLDER`] (e.g., "$<AMOUNT>").
    pub format: String,
    /// Minor units per major unit (e.g., 100 cents per dollar).
    pub divisor: u64,
}

impl Currency {
    /// Substitutes an already formatted amount into the display template.
    #[must_use]
    pub fn format_amount(&self, amount: impl std::fmt::Display) -> String {
        self.format.replace(AMOUNT_PLACEHOLDER, &amount.to_string())
    }

    /// Returns true if the currency has a coin worth one minor unit.
    #[must_use]
    pub fn has_unit_coin(&self) -> bool {
        self.coins.iter().any(|coin| coin.value == 1)
    }
}

/// Errors that can occur while loading a currency catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Unable to read currency catalog {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not well-formed JSON of the expected shape.
    #[error("Malformed currency catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required field is absent.
    #[error("Malformed currency catalog: missing field {field}")]
    MissingField {
        /// Path of the missing field (e.g., `currencies[0].divisor`).
        field: String,
    },

    /// A field is present but has an unusable value.
    #[error("Malformed currency catalog: {field} {reason}")]
    InvalidField {
        /// Path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Two currencies share a code.
    #[error("Duplicate currency code: {0}")]
    DuplicateCurrency(String),

    /// Two coins in one currency share a name.
    #[error("Duplicate coin {coin} in currency {currency}")]
    DuplicateCoin {
        /// Currency code.
        currency: String,
        /// Coin name.
        coin: String,
    },

    /// Greedy change cannot reach every amount without a unit coin.
    #[error("Currency {0} has no coin worth one minor unit")]
    NoUnitCoin(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self::Configuration(err.to_string())
    }
}

type Fields = Map<String, Value>;

fn invalid(path: &str, key: &str, reason: &'static str) -> CatalogError {
    CatalogError::InvalidField {
        field: format!("{path}.{key}"),
        reason,
    }
}

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Fields, CatalogError> {
    value.as_object().ok_or_else(|| CatalogError::InvalidField {
        field: path.to_string(),
        reason: "must be an object",
    })
}

/// Returns a field, treating `null` as absent.
fn required<'a>(fields: &'a Fields, path: &str, key: &str) -> Result<&'a Value, CatalogError> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(CatalogError::MissingField {
            field: format!("{path}.{key}"),
        }),
        Some(value) => Ok(value),
    }
}

fn non_empty_string(fields: &Fields, path: &str, key: &str) -> Result<String, CatalogError> {
    let value = required(fields, path, key)?
        .as_str()
        .ok_or_else(|| invalid(path, key, "must be a string"))?;
    if value.trim().is_empty() {
        return Err(invalid(path, key, "must not be empty"));
    }
    Ok(value.to_string())
}

fn positive_integer(fields: &Fields, path: &str, key: &str) -> Result<u64, CatalogError> {
    let value = required(fields, path, key)?;
    if !(value.is_u64() || value.is_i64()) {
        return Err(invalid(path, key, "must be an integer"));
    }
    value
        .as_u64()
        .filter(|v| *v > 0)
        .ok_or_else(|| invalid(path, key, "must be a positive integer"))
}

fn decode_coin(entry: &Value, path: &str) -> Result<Coin, CatalogError> {
    let fields = object(entry, path)?;
    Ok(Coin {
        name: non_empty_string(fields, path, "name")?,
        value: positive_integer(fields, path, "value")?,
    })
}

fn decode_currency(entry: &Value, index: usize) -> Result<Currency, CatalogError> {
    let path = format!("currencies[{index}]");
    let fields = object(entry, &path)?;

    let abbreviation = non_empty_string(fields, &path, "abbreviation")?;

    let raw_coins = required(fields, &path, "coins")?
        .as_array()
        .ok_or_else(|| invalid(&path, "coins", "must be an array"))?;
    if raw_coins.is_empty() {
        return Err(invalid(&path, "coins", "must contain at least one coin"));
    }
    let coins = raw_coins
        .iter()
        .enumerate()
        .map(|(i, coin)| decode_coin(coin, &format!("{path}.coins[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut names = HashSet::new();
    for coin in &coins {
        if !names.insert(coin.name.as_str()) {
            return Err(CatalogError::DuplicateCoin {
                currency: abbreviation,
                coin: coin.name.clone(),
            });
        }
    }

    let format = non_empty_string(fields, &path, "format")?;
    if !format.contains(AMOUNT_PLACEHOLDER) {
        return Err(invalid(&path, "format", "must contain the <AMOUNT> placeholder"));
    }

    let divisor = positive_integer(fields, &path, "divisor")?;

    let currency = Currency {
        abbreviation,
        coins,
        format,
        divisor,
    };
    if !currency.has_unit_coin() {
        return Err(CatalogError::NoUnitCoin(currency.abbreviation));
    }
    Ok(currency)
}

/// Read-only table of known currencies.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    currencies: Vec<Currency>,
}

impl CurrencyCatalog {
    /// Creates a catalog from already validated currencies.
    #[must_use]
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self { currencies }
    }

    /// Decodes and validates a JSON catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] naming the first offending field.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<Value> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        let mut currencies = Vec::with_capacity(raw.len());
        for (index, entry) in raw.iter().enumerate() {
            let currency = decode_currency(entry, index)?;
            if !seen.insert(currency.abbreviation.clone()) {
                return Err(CatalogError::DuplicateCurrency(currency.abbreviation));
            }
            currencies.push(currency);
        }

        Ok(Self::new(currencies))
    }

    /// Reads and decodes a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or a decode
    /// error as for [`CurrencyCatalog::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            currencies = catalog.len(),
            "Loaded currency catalog"
        );
        Ok(catalog)
    }

    /// Finds a currency by exact, case-sensitive code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.abbreviation == code)
    }

    /// Returns the currency codes in catalog order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.iter().map(|c| c.abbreviation.as_str())
    }

    /// Iterates over all currencies in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    /// Number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if the catalog has no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
