use std::sync::Arc;

use async_trait::async_trait;
use coinetl_market_data::MarketDataProvider;
use log::{debug, error, info};

use super::outcome::{CycleOutcome, StepResult};
use crate::sinks::{MarketStoreTrait, SnapshotSinkTrait};
use crate::transform::transform;

/// Something the scheduler can run once per tick.
#[async_trait]
pub trait CycleRunnerTrait: Send + Sync {
    /// Run one complete cycle. Never fails: step errors are captured in the
    /// returned outcome.
    async fn run_cycle(&self) -> CycleOutcome;
}

/// Runs fetch -> save raw -> transform -> save processed -> load db.
///
/// A failed fetch ends the cycle. Every later step is best-effort and runs
/// regardless of how the previous sink fared.
pub struct CycleRunner {
    provider: Arc<dyn MarketDataProvider>,
    snapshots: Arc<dyn SnapshotSinkTrait>,
    store: Arc<dyn MarketStoreTrait>,
}

impl CycleRunner {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        snapshots: Arc<dyn SnapshotSinkTrait>,
        store: Arc<dyn MarketStoreTrait>,
    ) -> Self {
        Self {
            provider,
            snapshots,
            store,
        }
    }
}

#[async_trait]
impl CycleRunnerTrait for CycleRunner {
    async fn run_cycle(&self) -> CycleOutcome {
        let mut outcome = CycleOutcome::default();

        let fetched = self.provider.fetch_markets().await;
        outcome.fetch = StepResult::from_result(&fetched);
        let raw = match fetched {
            Ok(raw) => raw,
            Err(e) => {
                error!(
                    "Cycle aborted, fetch from {} failed: {}",
                    self.provider.id(),
                    e
                );
                return outcome;
            }
        };

        let saved_raw = self.snapshots.save_raw(&raw).await;
        if let Err(e) = &saved_raw {
            error!("Failed to save raw data: {}", e);
        }
        outcome.save_raw = StepResult::from_result(&saved_raw);

        let projected = transform(&raw);
        outcome.transform = StepResult::Succeeded;
        outcome.records = projected.len();

        let saved_processed = self.snapshots.save_processed(&projected).await;
        if let Err(e) = &saved_processed {
            error!("Failed to save processed data: {}", e);
        }
        outcome.save_processed = StepResult::from_result(&saved_processed);

        // The store logs its own failures.
        let loaded = self.store.load(&raw).await;
        if let Ok(report) = &loaded {
            debug!(
                "Database load: {} inserted, {} failed",
                report.inserted, report.failed
            );
        }
        outcome.load_db = StepResult::from_result(&loaded);

        info!(
            "Cycle complete: {} records transformed ({})",
            outcome.records, outcome
        );
        outcome
    }
}
