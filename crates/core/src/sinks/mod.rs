//! Persistence sinks for one cycle's records.
//!
//! - `file_sink` - timestamped JSON snapshot files for raw and projected records
//! - `traits` - the sink seams the cycle runner persists through

mod file_sink;
mod traits;

pub use file_sink::{snapshot_file_name, FileSnapshotSink, PROCESSED_DIR, RAW_DIR};
pub use traits::{LoadReport, MarketStoreTrait, SnapshotSinkTrait};
