//! Raw-to-projection transformation.

use coinetl_market_data::{ProjectedMarketRecord, RawMarketRecord};

/// Project every raw record, one-to-one and in order.
///
/// Numeric fields are copied as-is; nothing is validated or filtered.
pub fn transform(raw: &[RawMarketRecord]) -> Vec<ProjectedMarketRecord> {
    raw.iter().map(ProjectedMarketRecord::from).collect()
}
