//! Fixed-interval driver for the ETL cycle.
//!
//! Runs one cycle immediately, then one per interval, until the cancellation
//! token fires. Cancellation is only observed between cycles: a cycle that has
//! started always runs to completion.

use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::cycle::CycleRunnerTrait;

/// Default interval between cycles.
pub const DEFAULT_CYCLE_INTERVAL: Duration = Duration::from_secs(30);

/// Run cycles until `cancel` is triggered and return how many were started.
///
/// A cycle that outlasts `period` delays the next tick instead of overlapping
/// it. `period` must be non-zero.
pub async fn run_scheduler(
    runner: Arc<dyn CycleRunnerTrait>,
    period: Duration,
    cancel: CancellationToken,
) -> u64 {
    if cancel.is_cancelled() {
        info!("Shutdown requested before the first cycle, scheduler not started");
        return 0;
    }

    info!("ETL scheduler started ({:?} interval)", period);

    // Ticks are anchored to the start of the first cycle.
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    runner.run_cycle().await;
    let mut cycles: u64 = 1;

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                info!("Shutdown signal received, stopping ETL scheduler after {} cycle(s)", cycles);
                break;
            }
            _ = ticker.tick() => {
                runner.run_cycle().await;
                cycles += 1;
            }
        }
    }

    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::CycleOutcome;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingRunner {
        started: AtomicU64,
        completed: AtomicU64,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        duration: Duration,
    }

    impl CountingRunner {
        fn taking(duration: Duration) -> Self {
            Self {
                duration,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl CycleRunnerTrait for CountingRunner {
        async fn run_cycle(&self) -> CycleOutcome {
            self.started.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if !self.duration.is_zero() {
                tokio::time::sleep(self.duration).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.completed.fetch_add(1, Ordering::SeqCst);
            CycleOutcome::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_immediately_then_once_per_interval() {
        let runner = Arc::new(CountingRunner::default());
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_scheduler(
            runner.clone(),
            Duration::from_secs(30),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(runner.started.load(Ordering::SeqCst), 1);

        // ticks at 30s, 60s and 90s
        tokio::time::sleep(Duration::from_secs(94)).await;
        cancel.cancel();

        let cycles = handle.await.unwrap();
        assert_eq!(cycles, 4);
        assert_eq!(runner.started.load(Ordering::SeqCst), 4);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(runner.started.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_start_runs_nothing() {
        let runner = Arc::new(CountingRunner::default());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let cycles = run_scheduler(runner.clone(), Duration::from_secs(30), cancel).await;

        assert_eq!(cycles, 0);
        assert_eq!(runner.started.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_cycle_completes_after_cancel() {
        let runner = Arc::new(CountingRunner::taking(Duration::from_secs(10)));
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_scheduler(
            runner.clone(),
            Duration::from_secs(30),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_secs(5)).await;
        cancel.cancel();

        let cycles = handle.await.unwrap();
        assert_eq!(cycles, 1);
        assert_eq!(runner.completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_cycles_never_overlap() {
        let runner = Arc::new(CountingRunner::taking(Duration::from_secs(45)));
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_scheduler(
            runner.clone(),
            Duration::from_secs(30),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_secs(200)).await;
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(runner.max_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(
            runner.started.load(Ordering::SeqCst),
            runner.completed.load(Ordering::SeqCst)
        );
        // back-to-back 45s cycles: starts at 0, 45, 90, 135, 180
        assert_eq!(runner.started.load(Ordering::SeqCst), 5);
    }
}
