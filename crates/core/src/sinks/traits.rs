use std::path::PathBuf;

use async_trait::async_trait;
use coinetl_market_data::{ProjectedMarketRecord, RawMarketRecord};

use crate::errors::Result;

/// File snapshot writer for raw and projected records.
///
/// Each call writes a new file and returns its path.
#[async_trait]
pub trait SnapshotSinkTrait: Send + Sync {
    async fn save_raw(&self, records: &[RawMarketRecord]) -> Result<PathBuf>;

    async fn save_processed(&self, records: &[ProjectedMarketRecord]) -> Result<PathBuf>;
}

/// Summary of one database load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows inserted successfully
    pub inserted: usize,
    /// Rows whose insert failed (each logged by the store)
    pub failed: usize,
    /// Table row count after the load, if the count query succeeded
    pub total_rows: Option<i64>,
}

/// Relational store receiving raw records.
///
/// Implementations return an error only when no row could be attempted
/// (connection or schema failure); individual row failures are counted in
/// the [`LoadReport`].
#[async_trait]
pub trait MarketStoreTrait: Send + Sync {
    async fn load(&self, records: &[RawMarketRecord]) -> Result<LoadReport>;
}
