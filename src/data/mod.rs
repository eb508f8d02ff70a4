//! Price data sources.

pub mod coingecko;

pub use coingecko::{CoinGeckoClient, PriceSource, parse_price};
