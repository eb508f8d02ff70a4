//! Threshold handling.
//!
//! Responsibilities:
//!
//! - parse `LOW:HIGH` specs and individual bound flags into ranges
//! - decide OK / WARNING / CRITICAL for a price

pub mod evaluate;
pub mod range;

pub use evaluate::*;
pub use range::*;
