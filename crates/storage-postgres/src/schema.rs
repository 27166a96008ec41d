//! SQL for the `coin_market_raw` table.

pub const MARKET_TABLE: &str = "coin_market_raw";

pub const CREATE_MARKET_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS coin_market_raw (
        id TEXT,
        symbol TEXT,
        name TEXT,
        image TEXT,
        current_price NUMERIC,
        market_cap NUMERIC,
        market_cap_rank INT,
        total_volume NUMERIC,
        high_24h NUMERIC,
        low_24h NUMERIC,
        price_change_24h NUMERIC,
        price_change_percentage_24h NUMERIC,
        last_updated TIMESTAMPTZ
    )
"#;

/// Append-only insert; rows are never updated or deduplicated.
pub const INSERT_MARKET_ROW: &str = r#"
    INSERT INTO coin_market_raw (
        id, symbol, name, image, current_price, market_cap, market_cap_rank,
        total_volume, high_24h, low_24h, price_change_24h,
        price_change_percentage_24h, last_updated
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
"#;

pub const COUNT_MARKET_ROWS: &str = "SELECT COUNT(*) FROM coin_market_raw";
