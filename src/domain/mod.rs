//! Domain types used throughout the check.
//!
//! This module defines:
//!
//! - threshold bands (`ThresholdRange`) and breach details (`Breach`, `BreachSide`)
//! - the resulting status (`StatusLevel`)
//! - the fetched value (`PriceSample`) and run configuration (`CheckConfig`)

pub mod types;

pub use types::*;
