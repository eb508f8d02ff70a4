//! Reporting: the single plugin output line.

pub mod format;

pub use format::*;
