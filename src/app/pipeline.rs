//! Pure check pipeline: price + config -> status.
//!
//! No network and no clock; `execute` in the parent module feeds it a
//! fetched price.

use crate::domain::{Breach, CheckConfig, PriceSample, StatusLevel};
use crate::error::CheckError;
use crate::threshold::Thresholds;

/// Outcome of evaluating a single price.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub status: StatusLevel,
    pub exit_code: u8,
    pub sample: PriceSample,
    pub breach: Option<Breach>,
}

/// Resolve thresholds from `config` and evaluate `price` against them.
pub fn run_check(price: f64, config: &CheckConfig) -> Result<CheckOutcome, CheckError> {
    let thresholds = Thresholds::from_config(config)?;
    Ok(check_price(price, &config.currency, &thresholds))
}

/// Evaluate `price` against already-resolved thresholds.
pub fn check_price(price: f64, currency: &str, thresholds: &Thresholds) -> CheckOutcome {
    let breach = thresholds.assess(price);
    let status = breach.map(|b| b.severity).unwrap_or(StatusLevel::Ok);
    CheckOutcome {
        status,
        exit_code: status.exit_code(),
        sample: PriceSample::new(currency, price),
        breach,
    }
}
