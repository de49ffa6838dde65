//! Currency definitions, the catalog, and unit conversion.

pub mod catalog;
pub mod conversion;

#[cfg(test)]
mod props;

pub use catalog::{AMOUNT_PLACEHOLDER, CatalogError, Coin, Currency, CurrencyCatalog};
pub use conversion::{to_major_units, to_minor_units};
