//! Shared types, errors, and configuration for Changemaker.
//!
//! This crate provides common types used across all other crates:
//! - Major-unit amounts with decimal precision
//! - Application-wide error types and exit codes
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::Amount;
