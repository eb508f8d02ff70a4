//! Command-line parsing for the Bitcoin price check.
//!
//! The goal of this module is to keep **argument parsing** separate from
//! threshold evaluation and I/O. Flags map one-to-one onto `CheckConfig`.

use clap::Parser;

use crate::domain::{CheckConfig, DEFAULT_API_URL, DEFAULT_CURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::threshold::parse_bound;

const AFTER_HELP: &str = "\
Examples:
  check_bitcoin_price
    Check Bitcoin price without thresholds (always returns OK)

  check_bitcoin_price -w 30000:50000 -c 25000:60000
    Warning if price is below 30000 or above 50000
    Critical if price is below 25000 or above 60000

  check_bitcoin_price --warning-low 30000 --critical-low 25000
    Only alert on price drops

  check_bitcoin_price --currency eur
    Check price in EUR instead of USD

Individual --*-low/--*-high flags override the matching side of -w/-c.";

/// Monitoring plugin that checks the current Bitcoin price.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "check_bitcoin_price",
    version,
    about = "Monitoring plugin to check the Bitcoin price",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Warning threshold range (LOW:HIGH, LOW:, :HIGH or LOW).
    #[arg(short = 'w', long, value_name = "RANGE", allow_hyphen_values = true)]
    pub warning: Option<String>,

    /// Critical threshold range (LOW:HIGH, LOW:, :HIGH or LOW).
    #[arg(short = 'c', long, value_name = "RANGE", allow_hyphen_values = true)]
    pub critical: Option<String>,

    /// Warning if the price drops below this value.
    #[arg(long, value_parser = bound_arg, allow_negative_numbers = true)]
    pub warning_low: Option<f64>,

    /// Warning if the price rises above this value.
    #[arg(long, value_parser = bound_arg, allow_negative_numbers = true)]
    pub warning_high: Option<f64>,

    /// Critical if the price drops below this value.
    #[arg(long, value_parser = bound_arg, allow_negative_numbers = true)]
    pub critical_low: Option<f64>,

    /// Critical if the price rises above this value.
    #[arg(long, value_parser = bound_arg, allow_negative_numbers = true)]
    pub critical_high: Option<f64>,

    /// Currency to check the price in (e.g. usd, eur, gbp).
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// API request timeout in seconds.
    #[arg(
        long,
        env = "CHECK_BITCOIN_PRICE_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Price API endpoint (CoinGecko simple/price compatible).
    #[arg(long, env = "CHECK_BITCOIN_PRICE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log request details to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn bound_arg(raw: &str) -> Result<f64, String> {
    parse_bound(raw).map_err(|_| format!("'{raw}' is not a finite number"))
}

impl From<Cli> for CheckConfig {
    fn from(cli: Cli) -> Self {
        CheckConfig {
            warning_range_spec: cli.warning,
            critical_range_spec: cli.critical,
            warning_low: cli.warning_low,
            warning_high: cli.warning_high,
            critical_low: cli.critical_low,
            critical_high: cli.critical_high,
            currency: cli.currency.to_lowercase(),
            timeout: cli.timeout,
            api_url: cli.api_url,
            verbose: cli.verbose,
        }
    }
}
