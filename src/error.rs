//! Error types shared across the screener layers.

use thiserror::Error;

/// Errors raised by external collaborators (price history, options chain,
/// notification transport).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection refused, TLS, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The per-attempt deadline elapsed.
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The API answered 200 but reported an error in its envelope.
    #[error("API error: {0}")]
    Api(String),

    /// The payload could not be mapped onto the domain model.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Timeout(_) => true,
            ProviderError::Request(e) => e.is_timeout() || e.is_connect(),
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            ProviderError::Api(_) | ProviderError::Decode(_) => false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    #[error("indicator period must be positive, got {0}")]
    InvalidPeriod(usize),

    #[error("input series lengths differ: high={high}, low={low}, close={close}")]
    LengthMismatch {
        high: usize,
        low: usize,
        close: usize,
    },
}

/// Fatal scan failures. Everything per-ticker is absorbed inside the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("ticker universe is empty")]
    EmptyUniverse,

    #[error("benchmark {ticker} history unavailable: {source}")]
    Benchmark {
        ticker: String,
        #[source]
        source: ProviderError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
