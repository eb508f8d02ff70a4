//! CoinGecko `simple/price` integration.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;

const COIN_ID: &str = "bitcoin";
const USER_AGENT: &str = concat!("check_bitcoin_price/", env!("CARGO_PKG_VERSION"));

/// Something that can quote the current Bitcoin price.
pub trait PriceSource {
    /// `currency` is expected lowercase (e.g. `usd`).
    fn fetch_price(&self, currency: &str) -> Result<f64, FetchError>;
}

pub struct CoinGeckoClient {
    client: Client,
    api_url: String,
}

impl CoinGeckoClient {
    /// Build a client whose requests give up after `timeout_secs`.
    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Request(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

impl PriceSource for CoinGeckoClient {
    fn fetch_price(&self, currency: &str) -> Result<f64, FetchError> {
        debug!(url = %self.api_url, currency, "fetching bitcoin price");

        let resp = self
            .client
            .get(&self.api_url)
            .query(&[("ids", COIN_ID), ("vs_currencies", currency)])
            .header(ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text()?;
        let price = parse_price(&body, currency)?;
        debug!(price, currency, "fetched bitcoin price");
        Ok(price)
    }
}

#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    bitcoin: HashMap<String, serde_json::Value>,
}

/// Extract the price for `currency` from a `simple/price` response body.
pub fn parse_price(body: &str, currency: &str) -> Result<f64, FetchError> {
    let parsed: SimplePriceResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let key = currency.to_lowercase();
    let value = parsed
        .bitcoin
        .get(&key)
        .ok_or_else(|| FetchError::UnsupportedCurrency(key.clone()))?;

    // serde_json refuses numbers outside the f64 range, so this is always finite.
    value
        .as_f64()
        .ok_or_else(|| FetchError::Parse(format!("price for '{key}' is not a number: {value}")))
}
