use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{null_as_zero, optional};

/// One coin's market snapshot, exactly as returned by `/coins/markets`.
///
/// Fields the upstream may send as `null` (or omit) are optional and are left
/// out again when the record is serialized, so a saved snapshot reproduces the
/// upstream object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawMarketRecord {
    /// Stable coin identifier (e.g. "bitcoin")
    pub id: String,

    pub symbol: String,

    /// Display name
    pub name: String,

    /// Logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub current_price: Decimal,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<i32>,

    /// 24h trading volume
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_volume: Decimal,

    #[serde(default, deserialize_with = "optional", skip_serializing_if = "Option::is_none")]
    pub high_24h: Option<Decimal>,

    #[serde(default, deserialize_with = "optional", skip_serializing_if = "Option::is_none")]
    pub low_24h: Option<Decimal>,

    #[serde(default, deserialize_with = "optional", skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<Decimal>,

    #[serde(default, deserialize_with = "optional", skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<Decimal>,

    /// ISO-8601 timestamp supplied by the upstream, kept verbatim
    #[serde(default)]
    pub last_updated: String,
}

/// Reduced view of a [`RawMarketRecord`] for secondary consumers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedMarketRecord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Decimal,
    pub market_cap: Decimal,
    pub total_volume: Decimal,
    pub last_updated: String,
}

impl From<&RawMarketRecord> for ProjectedMarketRecord {
    fn from(raw: &RawMarketRecord) -> Self {
        Self {
            id: raw.id.clone(),
            symbol: raw.symbol.clone(),
            name: raw.name.clone(),
            current_price: raw.current_price,
            market_cap: raw.market_cap,
            total_volume: raw.total_volume,
            last_updated: raw.last_updated.clone(),
        }
    }
}
