mod repository;

pub use repository::{parse_last_updated, PgMarketStore, DEFAULT_CONNECT_TIMEOUT};
