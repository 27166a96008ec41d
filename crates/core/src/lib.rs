//! CoinETL Core - the scheduled extract-transform-load cycle.
//!
//! This crate owns the cycle logic and is database-agnostic: it defines the
//! [`MarketStoreTrait`] seam implemented by the `storage-postgres` crate.
//!
//! ```text
//! run_scheduler --(immediately, then every interval)--> CycleRunner
//!     fetch -> save raw -> transform -> save processed -> load db
//! ```

pub mod cycle;
pub mod errors;
pub mod scheduler;
pub mod sinks;
pub mod transform;

pub use cycle::{CycleOutcome, CycleRunner, CycleRunnerTrait, CycleStep, StepResult};
pub use errors::{DatabaseError, Error, Result};
pub use scheduler::{run_scheduler, DEFAULT_CYCLE_INTERVAL};
pub use sinks::{FileSnapshotSink, LoadReport, MarketStoreTrait, SnapshotSinkTrait};
pub use transform::transform;
