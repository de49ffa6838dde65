//! Command-line parsing.
//!
//! Parsing is a pure function from argument tokens to a [`ChangeRequest`] or
//! an [`AppError`]. Deciding to exit the process is left to `main`.

use clap::{CommandFactory, Parser};

use changemaker_core::Sale;
use changemaker_shared::{Amount, AppError, AppResult};

/// Options that take a value.
const VALUE_FLAGS: [&str; 3] = ["--item-cost", "--payment", "--currency"];

/// Options that stand alone.
const SWITCHES: [&str; 2] = ["-h", "--help"];

/// Compute the coins to hand back for a purchase.
#[derive(Debug, Parser)]
#[command(
    name = "changemaker",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Cost of the item in major currency units (e.g. 1.50)
    #[arg(long = "item-cost", value_name = "DECIMAL", allow_hyphen_values = true)]
    item_cost: Option<String>,

    /// Amount tendered in major currency units (e.g. 2.00)
    #[arg(long, value_name = "DECIMAL", allow_hyphen_values = true)]
    payment: Option<String>,

    /// Currency code from the catalog [default: USD]
    #[arg(long, value_name = "CODE", allow_hyphen_values = true)]
    currency: Option<String>,

    /// Print this usage text
    #[arg(short = 'h', long = "help")]
    help: bool,
}

/// A validated request for change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    /// Cost and payment.
    pub sale: Sale,
    /// Currency code to resolve against the catalog.
    pub currency: String,
}

/// Drops every token that is not a recognized option or its value.
///
/// The first token (the program name) is always kept. A value flag with
/// nothing after it is dropped, so it reads as missing.
fn retain_recognized(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            if let Some(value) = args.next() {
                kept.push(arg);
                kept.push(value);
            }
        } else if SWITCHES.contains(&arg.as_str())
            || VALUE_FLAGS.iter().any(|flag| {
                arg.strip_prefix(flag)
                    .is_some_and(|rest| rest.starts_with('='))
            })
        {
            kept.push(arg);
        }
    }

    kept
}

fn parse_amount(raw: Option<String>, flag: &'static str, field: &'static str) -> AppResult<Amount> {
    let raw = raw.ok_or(AppError::MissingArgument(flag))?;
    raw.parse()
        .map_err(|_| AppError::InvalidArgument { field, value: raw })
}

/// Parses command-line tokens, including the program name.
///
/// Unknown tokens are ignored. `default_currency` applies when `--currency`
/// is absent.
///
/// # Errors
///
/// - [`AppError::HelpRequested`] for `-h` / `--help`
/// - [`AppError::MissingArgument`] if a required option is absent
/// - [`AppError::InvalidArgument`] if an amount is not a positive decimal
pub fn parse_args(
    args: impl IntoIterator<Item = String>,
    default_currency: &str,
) -> AppResult<ChangeRequest> {
    let cli = Cli::try_parse_from(retain_recognized(args)).map_err(|err| {
        AppError::Usage(err.kind().as_str().unwrap_or("unrecognized input").to_string())
    })?;

    if cli.help {
        return Err(AppError::HelpRequested);
    }

    let item_cost = parse_amount(cli.item_cost, "item-cost", "item_cost")?;
    let payment = parse_amount(cli.payment, "payment", "payment")?;
    let currency = cli
        .currency
        .unwrap_or_else(|| default_currency.to_string());

    Ok(ChangeRequest {
        sale: Sale::new(item_cost, payment),
        currency,
    })
}

/// Renders the usage block.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
