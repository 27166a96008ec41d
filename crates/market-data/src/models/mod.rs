//! Market data models
//!
//! - `market` - Upstream market snapshot (`RawMarketRecord`) and its reduced
//!   projection (`ProjectedMarketRecord`)

mod decimal;
mod market;

pub use market::{ProjectedMarketRecord, RawMarketRecord};
