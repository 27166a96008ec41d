//! CoinGecko market data provider implementation.
//!
//! Fetches one page of `/coins/markets`, ordered by market capitalization.
//! API documentation: https://docs.coingecko.com/reference/coins-markets

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::errors::MarketDataError;
use crate::metrics::EtlMetrics;
use crate::models::RawMarketRecord;
use crate::provider::MarketDataProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";
const PROVIDER_ID: &str = "COINGECKO";

/// Fixed request timeout for one fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request parameters for the markets endpoint.
///
/// Values are passed to the upstream as given; an empty currency or a zero
/// page size is left for the API to reject.
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    pub vs_currency: String,
    pub per_page: u32,
    pub timeout: Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            vs_currency: "usd".to_string(),
            per_page: 100,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// CoinGecko `/coins/markets` provider.
///
/// The HTTP client is built once and reused across cycles. Every call updates
/// the shared [`EtlMetrics`].
pub struct CoinGeckoProvider {
    client: Client,
    config: CoinGeckoConfig,
    metrics: Arc<EtlMetrics>,
}

impl CoinGeckoProvider {
    pub fn new(config: CoinGeckoConfig, metrics: Arc<EtlMetrics>) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(MarketDataError::ClientBuild)?;

        Ok(Self {
            client,
            config,
            metrics,
        })
    }

    /// Query string appended to the base URL.
    fn query_params(&self) -> [(&'static str, String); 5] {
        [
            ("vs_currency", self.config.vs_currency.clone()),
            ("order", "market_cap_desc".to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", "1".to_string()),
            ("sparkline", "false".to_string()),
        ]
    }

    fn classify(&self, e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Transport {
                provider: PROVIDER_ID.to_string(),
                source: e,
            }
        }
    }

    async fn request_markets(&self) -> Result<Vec<RawMarketRecord>, MarketDataError> {
        debug!("CoinGecko request: {}", self.config.base_url);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query_params())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(e)
            } else {
                MarketDataError::ReadBody(e)
            }
        })?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_markets(&self) -> Result<Vec<RawMarketRecord>, MarketDataError> {
        match self.request_markets().await {
            Ok(records) => {
                info!("Successfully fetched {} coin records", records.len());
                self.metrics.record_fetch_success(records.len());
                Ok(records)
            }
            Err(e) => {
                if e.is_transport() {
                    error!("Failed to reach market data upstream: {}", e);
                } else {
                    error!("Failed to fetch market data: {}", e);
                }
                self.metrics.record_fetch_failure();
                Err(e)
            }
        }
    }
}
