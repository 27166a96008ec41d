//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RawMarketRecord;

/// A source of market snapshots.
///
/// One call fetches one page of records; implementations do not retry.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "COINGECKO".
    ///
    /// Used in error values and log lines.
    fn id(&self) -> &'static str;

    /// Fetch the current market snapshot.
    ///
    /// On success the returned vector may be empty if the upstream had no
    /// records.
    async fn fetch_markets(&self) -> Result<Vec<RawMarketRecord>, MarketDataError>;
}
