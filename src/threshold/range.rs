//! Threshold range parsing.
//!
//! Accepted forms: `LOW:HIGH`, `LOW:`, `:HIGH`, and a bare `LOW`.
//! Splitting happens on the first colon only, so anything after it must
//! parse as a single number.

use crate::domain::ThresholdRange;
use crate::error::CheckError;

/// Parse a combined range spec such as `30000:50000`.
///
/// An empty spec yields an unbounded range. A side that is empty (or only
/// whitespace) is left unset. A side that does not parse as a finite number
/// fails with `InvalidRangeFormat` naming the whole spec.
pub fn parse_range(spec: &str) -> Result<ThresholdRange, CheckError> {
    let (low, high) = match spec.split_once(':') {
        Some((low, high)) => (low, high),
        None => (spec, ""),
    };

    Ok(ThresholdRange {
        low: parse_side(low, spec)?,
        high: parse_side(high, spec)?,
    })
}

/// Build a range from separately supplied bounds.
pub fn build_range(low: Option<f64>, high: Option<f64>) -> ThresholdRange {
    ThresholdRange { low, high }
}

/// Combine a combined spec with individual bound flags for one severity.
///
/// An individual flag wins for the bound it sets; the spec only fills in
/// bounds no flag provided. Non-finite flag values are rejected like a bad
/// spec.
pub fn resolve_range(
    spec: Option<&str>,
    low: Option<f64>,
    high: Option<f64>,
) -> Result<ThresholdRange, CheckError> {
    for bound in [low, high].into_iter().flatten() {
        if !bound.is_finite() {
            return Err(CheckError::invalid_range(bound.to_string()));
        }
    }
    let parsed = match spec {
        Some(spec) => parse_range(spec)?,
        None => ThresholdRange::UNBOUNDED,
    };
    Ok(build_range(low.or(parsed.low), high.or(parsed.high)))
}

/// Parse one bound given on its own (e.g. `--warning-low`).
pub fn parse_bound(raw: &str) -> Result<f64, CheckError> {
    match parse_side(raw, raw)? {
        Some(value) => Ok(value),
        None => Err(CheckError::invalid_range(raw)),
    }
}

fn parse_side(side: &str, spec: &str) -> Result<Option<f64>, CheckError> {
    let trimmed = side.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(CheckError::invalid_range(spec)),
    }
}
