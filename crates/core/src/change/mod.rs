//! Greedy change-making and transaction settlement.

pub mod engine;
pub mod error;
pub mod settlement;

#[cfg(test)]
mod props;

pub use engine::{ChangeEngine, ChangeInstructions, ChangeStep};
pub use error::ChangeError;
pub use settlement::{Sale, Settlement, settle};
