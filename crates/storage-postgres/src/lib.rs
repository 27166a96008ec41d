//! PostgreSQL storage implementation for CoinETL.
//!
//! Implements [`coinetl_core::MarketStoreTrait`] on top of sqlx. This crate is
//! the only place in the workspace where sqlx appears; `core` works with the
//! trait and its database-agnostic error type.
//!
//! ```text
//! core (cycle runner)
//!        │  MarketStoreTrait
//!        ▼
//! storage-postgres (this crate)
//!        │
//!        ▼
//!   PostgreSQL
//! ```

pub mod errors;
pub mod market_data;
pub mod schema;
pub mod settings;

pub use errors::StorageError;
pub use market_data::PgMarketStore;
pub use settings::PostgresSettings;
