//! Changemaker CLI
//!
//! Main entry point: prints the coins to hand back for one purchase.

mod args;

use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use changemaker_core::{CurrencyCatalog, Receipt, settle};
use changemaker_shared::{AppConfig, AppError, AppResult};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr; stdout carries the receipt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "changemaker=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(std::env::args()) {
        Ok(receipt) => {
            print!("{receipt}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(code = err.error_code(), "Run failed");
            if let Some(message) = err.diagnostic() {
                eprintln!("{message}");
            }
            if err.shows_usage() {
                println!("{}", args::usage());
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// Runs one transaction and returns the rendered receipt.
fn run(argv: impl IntoIterator<Item = String>) -> AppResult<String> {
    let config = AppConfig::load()?;
    let catalog = CurrencyCatalog::load(&config.catalog.path)?;

    let request = args::parse_args(argv, &config.default_currency)?;
    debug!(
        item_cost = %request.sale.item_cost,
        payment = %request.sale.payment,
        currency = %request.currency,
        "Parsed request"
    );

    let currency = catalog
        .lookup(&request.currency)
        .ok_or_else(|| AppError::UnknownCurrency(request.currency.clone()))?;

    let settlement = settle(&request.sale, currency)?;
    Ok(Receipt::new(&settlement, currency).to_string())
}
