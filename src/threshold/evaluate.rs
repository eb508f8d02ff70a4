//! Price evaluation against warning and critical ranges.
//!
//! Critical is always checked first, so a price outside both ranges is
//! CRITICAL. Bounds are inclusive: only strict inequality breaches.

use tracing::debug;

use crate::domain::{Breach, BreachSide, CheckConfig, StatusLevel, ThresholdRange};
use crate::error::CheckError;

use super::range::resolve_range;

/// Resolved warning and critical ranges for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    pub warning: ThresholdRange,
    pub critical: ThresholdRange,
}

impl Thresholds {
    /// Resolve both severities from raw config values.
    pub fn from_config(config: &CheckConfig) -> Result<Self, CheckError> {
        let warning = resolve_range(
            config.warning_range_spec.as_deref(),
            config.warning_low,
            config.warning_high,
        )?;
        let critical = resolve_range(
            config.critical_range_spec.as_deref(),
            config.critical_low,
            config.critical_high,
        )?;
        debug!(%warning, %critical, "resolved thresholds");
        Ok(Self { warning, critical })
    }

    pub fn evaluate(&self, price: f64) -> StatusLevel {
        evaluate(price, &self.warning, &self.critical)
    }

    pub fn assess(&self, price: f64) -> Option<Breach> {
        assess(price, &self.warning, &self.critical)
    }
}

pub fn is_out_of_range(price: f64, range: &ThresholdRange) -> bool {
    breached_side(price, range).is_some()
}

/// Status for `price`. Never fails; a NaN price compares false everywhere
/// and therefore reports OK.
pub fn evaluate(price: f64, warning: &ThresholdRange, critical: &ThresholdRange) -> StatusLevel {
    assess(price, warning, critical)
        .map(|b| b.severity)
        .unwrap_or(StatusLevel::Ok)
}

/// Same decision as [`evaluate`], returning the bound that fired.
pub fn assess(price: f64, warning: &ThresholdRange, critical: &ThresholdRange) -> Option<Breach> {
    [(StatusLevel::Critical, critical), (StatusLevel::Warning, warning)]
        .into_iter()
        .find_map(|(severity, range)| {
            breached_side(price, range).map(|(side, bound)| Breach { severity, side, bound })
        })
}

// Low is checked before high; only observable when low > high.
fn breached_side(price: f64, range: &ThresholdRange) -> Option<(BreachSide, f64)> {
    if let Some(low) = range.low {
        if price < low {
            return Some((BreachSide::Below, low));
        }
    }
    if let Some(high) = range.high {
        if price > high {
            return Some((BreachSide::Above, high));
        }
    }
    None
}
