//! Market data provider abstraction and implementations.
//!
//! - The `MarketDataProvider` trait the ETL cycle fetches through
//! - `coingecko` - the CoinGecko `/coins/markets` implementation

mod traits;

pub mod coingecko;

pub use traits::MarketDataProvider;
