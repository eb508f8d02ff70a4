//! Shared domain types.
//!
//! These are plain values built once per invocation and never mutated:
//!
//! - threshold bands and the status they resolve to (`ThresholdRange`, `StatusLevel`)
//! - the fetched price (`PriceSample`)
//! - the run configuration derived from CLI flags (`CheckConfig`)

use std::fmt;

/// CoinGecko `simple/price` endpoint (free tier, no API key).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CURRENCY: &str = "usd";

/// Acceptable band for a price. Both bounds are inclusive.
///
/// A value strictly below `low` or strictly above `high` is out of range.
/// A range with neither bound set never breaches. `low > high` is not
/// rejected; each bound is applied on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ThresholdRange {
    pub const UNBOUNDED: ThresholdRange = ThresholdRange { low: None, high: None };

    pub fn is_unbounded(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.low, self.high) {
            (None, None) => write!(f, "-"),
            (Some(low), None) => write!(f, "{low}:"),
            (None, Some(high)) => write!(f, ":{high}"),
            (Some(low), Some(high)) => write!(f, "{low}:{high}"),
        }
    }
}

/// Plugin status, in increasing severity.
///
/// `Unknown` is reserved for operational failures and is never produced by
/// comparing a price against thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusLevel {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl StatusLevel {
    pub fn label(self) -> &'static str {
        match self {
            StatusLevel::Ok => "OK",
            StatusLevel::Warning => "WARNING",
            StatusLevel::Critical => "CRITICAL",
            StatusLevel::Unknown => "UNKNOWN",
        }
    }

    /// Standard monitoring-plugin exit code.
    pub fn exit_code(self) -> u8 {
        match self {
            StatusLevel::Ok => 0,
            StatusLevel::Warning => 1,
            StatusLevel::Critical => 2,
            StatusLevel::Unknown => 3,
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of a range was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachSide {
    Below,
    Above,
}

impl BreachSide {
    pub fn as_str(self) -> &'static str {
        match self {
            BreachSide::Below => "below",
            BreachSide::Above => "above",
        }
    }
}

/// The bound that decided a non-OK status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breach {
    pub severity: StatusLevel,
    pub side: BreachSide,
    pub bound: f64,
}

/// A fetched price. `currency` is always lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSample {
    pub currency: String,
    pub price: f64,
}

impl PriceSample {
    pub fn new(currency: &str, price: f64) -> Self {
        Self {
            currency: currency.to_lowercase(),
            price,
        }
    }

    pub fn currency_display(&self) -> String {
        self.currency.to_uppercase()
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults). Threshold strings are
/// kept raw here and resolved by `threshold::Thresholds::from_config`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub warning_range_spec: Option<String>,
    pub critical_range_spec: Option<String>,
    pub warning_low: Option<f64>,
    pub warning_high: Option<f64>,
    pub critical_low: Option<f64>,
    pub critical_high: Option<f64>,
    pub currency: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    pub api_url: String,
    pub verbose: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            warning_range_spec: None,
            critical_range_spec: None,
            warning_low: None,
            warning_high: None,
            critical_low: None,
            critical_high: None,
            currency: DEFAULT_CURRENCY.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            api_url: DEFAULT_API_URL.to_string(),
            verbose: false,
        }
    }
}
