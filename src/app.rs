//! Plugin invocation: argv in, one status line and an exit code out.
//!
//! Thresholds are resolved before the price API is called, so a bad range
//! never costs a request. Any failure along the way is reported as UNKNOWN.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::Cli;
use crate::data::{CoinGeckoClient, PriceSource};
use crate::domain::{CheckConfig, StatusLevel};
use crate::error::CheckError;
use crate::report::{format_status_line, format_unknown_line};
use crate::threshold::Thresholds;

pub mod pipeline;

use pipeline::CheckOutcome;

/// What the process prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: StatusLevel,
    pub line: String,
}

impl Report {
    pub fn from_outcome(outcome: &CheckOutcome) -> Self {
        Self {
            status: outcome.status,
            line: format_status_line(outcome.status, &outcome.sample),
        }
    }

    pub fn failure(err: &CheckError) -> Self {
        Self {
            status: err.status(),
            line: format_unknown_line(err),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status.exit_code())
    }
}

/// Entry point for the `check_bitcoin_price` binary.
pub fn run() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => return argument_error(err),
    };
    let config = CheckConfig::from(cli);
    init_logging(config.verbose);

    let report = match CoinGeckoClient::new(config.api_url.clone(), config.timeout) {
        Ok(client) => execute(&config, &client),
        Err(err) => Report::failure(&CheckError::from(err)),
    };

    println!("{}", report.line);
    report.exit_code()
}

/// Run one check against `source`. Every failure becomes an UNKNOWN report.
pub fn execute(config: &CheckConfig, source: &dyn PriceSource) -> Report {
    match check(config, source) {
        Ok(outcome) => {
            if let Some(breach) = &outcome.breach {
                debug!(
                    "price {:.2} is {} {} threshold {:.2}",
                    outcome.sample.price,
                    breach.side.as_str(),
                    breach.severity.label().to_lowercase(),
                    breach.bound
                );
            }
            Report::from_outcome(&outcome)
        }
        Err(err) => {
            warn!(error = %err, "check failed");
            Report::failure(&err)
        }
    }
}

fn check(config: &CheckConfig, source: &dyn PriceSource) -> Result<CheckOutcome, CheckError> {
    let thresholds = Thresholds::from_config(config)?;
    let price = source.fetch_price(&config.currency)?;
    Ok(pipeline::check_price(price, &config.currency, &thresholds))
}

// clap exits with 2 on usage errors, which a supervisor would read as CRITICAL.
fn argument_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let rendered = err.to_string();
            let summary = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            let _ = err.print();
            let report = Report::failure(&CheckError::InvalidArguments(summary));
            println!("{}", report.line);
            report.exit_code()
        }
    }
}

/// Logs go to stderr so stdout stays a single status line.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "check_bitcoin_price=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
