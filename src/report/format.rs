//! Status line formatting.
//!
//! Output changes stay localized here so the threshold code never builds
//! strings. One line per invocation:
//!
//! `<LEVEL> - Bitcoin price is <price> <CUR> | bitcoin_price=<price>`

use crate::domain::{PriceSample, StatusLevel};
use crate::error::CheckError;

pub const PERFDATA_LABEL: &str = "bitcoin_price";

/// `bitcoin_price=<price>` with two decimals.
pub fn format_perfdata(price: f64) -> String {
    format!("{PERFDATA_LABEL}={price:.2}")
}

/// Status line for a successfully fetched price. Same shape for every level.
pub fn format_status_line(status: StatusLevel, sample: &PriceSample) -> String {
    format!(
        "{} - Bitcoin price is {:.2} {} | {}",
        status.label(),
        sample.price,
        sample.currency_display(),
        format_perfdata(sample.price)
    )
}

/// Status line for an invocation that could not produce a price verdict.
pub fn format_unknown_line(err: &CheckError) -> String {
    format!("{} - {err}", StatusLevel::Unknown.label())
}
