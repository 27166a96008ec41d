//! Error types for the market data crate.
//!
//! Every variant is a fetch failure: the caller gets it back unchanged and no
//! retry happens inside the provider.

use thiserror::Error;

/// Errors that can occur while fetching or accounting market data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request did not complete within the configured timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// Connection or other transport failure before a response arrived.
    #[error("Transport error: {provider} - {source}")]
    Transport {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-2xx status.
    #[error("Provider error: {provider} - HTTP {status}")]
    HttpStatus {
        provider: String,
        /// Status code and reason phrase, e.g. "500 Internal Server Error"
        status: String,
    },

    /// The response body could not be read to the end.
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The response body is not a JSON array of market records.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Metric registration failed.
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl MarketDataError {
    /// Whether the failure happened before any HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, MarketDataError>;
