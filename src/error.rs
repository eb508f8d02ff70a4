use thiserror::Error;

use crate::domain::StatusLevel;

/// Failures from the price API collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("API request timed out")]
    Timeout,
    #[error("API request failed: {0}")]
    Request(String),
    #[error("API request failed with status {0}")]
    Status(u16),
    #[error("Failed to parse API response: {0}")]
    Parse(String),
    #[error("Failed to parse API response: no price for currency '{0}'")]
    UnsupportedCurrency(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Every error that can end an invocation. All of them report UNKNOWN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    #[error("Invalid range format: '{spec}'. Expected LOW:HIGH, LOW:, :HIGH or LOW")]
    InvalidRangeFormat { spec: String },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl CheckError {
    pub fn invalid_range(spec: impl Into<String>) -> Self {
        CheckError::InvalidRangeFormat { spec: spec.into() }
    }

    pub fn status(&self) -> StatusLevel {
        StatusLevel::Unknown
    }

    pub fn exit_code(&self) -> u8 {
        self.status().exit_code()
    }
}
