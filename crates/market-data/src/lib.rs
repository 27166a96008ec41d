//! CoinETL Market Data Crate
//!
//! Fetches cryptocurrency market snapshots and counts the outcome.
//!
//! # Core Types
//!
//! - [`RawMarketRecord`] - One coin's snapshot as returned by the upstream API
//! - [`ProjectedMarketRecord`] - Reduced view derived from a raw record
//! - [`MarketDataProvider`] - Trait for a snapshot source
//! - [`CoinGeckoProvider`] - CoinGecko `/coins/markets` implementation
//! - [`EtlMetrics`] - Fetch success/failure and records-processed counters

pub mod errors;
pub mod metrics;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use metrics::EtlMetrics;
pub use models::{ProjectedMarketRecord, RawMarketRecord};
pub use provider::coingecko::{CoinGeckoConfig, CoinGeckoProvider};
pub use provider::MarketDataProvider;
