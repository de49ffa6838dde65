//! Core change-making logic for Changemaker.
//!
//! This crate contains pure business logic with ZERO command-line dependencies.
//! Currency definitions, the greedy change engine, and receipt rendering live here.
//!
//! # Modules
//!
//! - `currency` - Currency catalog, validating loader, unit conversion
//! - `change` - Greedy change engine and sale settlement
//! - `receipt` - Console rendering of change instructions

pub mod change;
pub mod currency;
pub mod receipt;

pub use change::{ChangeEngine, ChangeError, ChangeInstructions, ChangeStep, Sale, Settlement, settle};
pub use currency::{CatalogError, Coin, Currency, CurrencyCatalog};
pub use receipt::Receipt;
