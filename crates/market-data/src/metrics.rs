//! Process-wide ETL counters exported in the Prometheus text format.
//!
//! [`EtlMetrics`] owns its own [`Registry`]; the fetcher increments the
//! counters and the HTTP layer only gathers them.

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::errors::Result;

pub const FETCH_SUCCESS_TOTAL: &str = "coingecko_fetch_success_total";
pub const FETCH_FAILURE_TOTAL: &str = "coingecko_fetch_failure_total";
pub const RECORDS_PROCESSED_TOTAL: &str = "coingecko_records_processed_total";

/// Monotonic fetch counters.
pub struct EtlMetrics {
    registry: Registry,
    fetch_success: IntCounter,
    fetch_failure: IntCounter,
    records_processed: IntCounter,
}

impl EtlMetrics {
    /// Create the counters and register them in a fresh registry.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let fetch_success = IntCounter::new(
            FETCH_SUCCESS_TOTAL,
            "Total number of successful API fetches",
        )?;
        let fetch_failure =
            IntCounter::new(FETCH_FAILURE_TOTAL, "Total number of failed API fetches")?;
        let records_processed = IntCounter::new(
            RECORDS_PROCESSED_TOTAL,
            "Total number of coin records processed",
        )?;

        registry.register(Box::new(fetch_success.clone()))?;
        registry.register(Box::new(fetch_failure.clone()))?;
        registry.register(Box::new(records_processed.clone()))?;

        Ok(Self {
            registry,
            fetch_success,
            fetch_failure,
            records_processed,
        })
    }

    /// Record a successful fetch that returned `records` items.
    pub fn record_fetch_success(&self, records: usize) {
        self.fetch_success.inc();
        self.records_processed.inc_by(records as u64);
    }

    pub fn record_fetch_failure(&self) {
        self.fetch_failure.inc();
    }

    pub fn fetch_success_total(&self) -> u64 {
        self.fetch_success.get()
    }

    pub fn fetch_failure_total(&self) -> u64 {
        self.fetch_failure.get()
    }

    pub fn records_processed_total(&self) -> u64 {
        self.records_processed.get()
    }

    /// Content type of [`render`](Self::render) output.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Gather all counters in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
