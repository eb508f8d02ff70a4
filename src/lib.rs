//! Bitcoin price check for Nagios-compatible monitoring.
//!
//! `app::run` is the whole binary. Range parsing and evaluation live in
//! `threshold` and never touch the network; quotes come through
//! `data::PriceSource`.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;
pub mod threshold;
