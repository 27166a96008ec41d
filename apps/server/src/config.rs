use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{bail, Context};
use coinetl_core::DEFAULT_CYCLE_INTERVAL;
use coinetl_market_data::provider::coingecko::{CoinGeckoConfig, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
use coinetl_storage_postgres::PostgresSettings;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub coingecko: CoinGeckoConfig,
    pub postgres: PostgresSettings,
    pub data_dir: PathBuf,
    pub cycle_interval: Duration,
    pub log_format: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load from the process environment, after applying a `.env` file if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys take their defaults;
    /// only values that cannot be parsed are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("ETL_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid ETL_LISTEN_ADDR")?;

        let per_page: u32 = var("COINGECKO_PER_PAGE", "100")
            .trim()
            .parse()
            .context("Invalid COINGECKO_PER_PAGE")?;
        let coingecko = CoinGeckoConfig {
            base_url: var("COINGECKO_URL", DEFAULT_BASE_URL),
            vs_currency: var("COINGECKO_VS_CURRENCY", "usd"),
            per_page,
            timeout: REQUEST_TIMEOUT,
        };

        let defaults = PostgresSettings::default();
        let postgres = PostgresSettings {
            host: var("POSTGRES_HOST", &defaults.host),
            port: var("POSTGRES_PORT", &defaults.port.to_string())
                .trim()
                .parse()
                .context("Invalid POSTGRES_PORT")?,
            database: var("POSTGRES_DB", &defaults.database),
            user: var("POSTGRES_USER", &defaults.user),
            password: var("POSTGRES_PASSWORD", &defaults.password),
        };

        let interval_secs: u64 = var(
            "ETL_INTERVAL_SECS",
            &DEFAULT_CYCLE_INTERVAL.as_secs().to_string(),
        )
        .trim()
        .parse()
        .context("Invalid ETL_INTERVAL_SECS")?;
        if interval_secs == 0 {
            bail!("ETL_INTERVAL_SECS must be greater than zero");
        }

        let log_file = var("ETL_LOG_FILE", "logs/etl.log");

        Ok(Self {
            listen_addr,
            coingecko,
            postgres,
            data_dir: PathBuf::from(var("ETL_DATA_DIR", "data")),
            cycle_interval: Duration::from_secs(interval_secs),
            log_format: var("ETL_LOG_FORMAT", "text"),
            log_file: (!log_file.is_empty()).then(|| PathBuf::from(log_file)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.coingecko.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.coingecko.vs_currency, "usd");
        assert_eq!(config.coingecko.per_page, 100);
        assert_eq!(config.coingecko.timeout, Duration::from_secs(10));
        assert_eq!(config.postgres.host, "localhost");
        assert_eq!(config.postgres.port, 5432);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.cycle_interval, Duration::from_secs(30));
        assert_eq!(config.log_format, "text");
        assert_eq!(config.log_file, Some(PathBuf::from("logs/etl.log")));
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("COINGECKO_URL", "http://localhost:9000/markets"),
            ("COINGECKO_VS_CURRENCY", "eur"),
            ("COINGECKO_PER_PAGE", "250"),
            ("POSTGRES_HOST", "db"),
            ("POSTGRES_PORT", "6543"),
            ("POSTGRES_DB", "markets"),
            ("POSTGRES_USER", "etl"),
            ("POSTGRES_PASSWORD", "secret"),
            ("ETL_INTERVAL_SECS", "5"),
            ("ETL_LOG_FILE", ""),
            ("ETL_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.coingecko.base_url, "http://localhost:9000/markets");
        assert_eq!(config.coingecko.vs_currency, "eur");
        assert_eq!(config.coingecko.per_page, 250);
        assert_eq!(config.postgres.port, 6543);
        assert_eq!(config.postgres.database, "markets");
        assert_eq!(config.postgres.password, "secret");
        assert_eq!(config.cycle_interval, Duration::from_secs(5));
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn test_empty_and_zero_pass_through() {
        let config = from_pairs(&[("COINGECKO_VS_CURRENCY", ""), ("COINGECKO_PER_PAGE", "0")])
            .unwrap();
        assert_eq!(config.coingecko.vs_currency, "");
        assert_eq!(config.coingecko.per_page, 0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(from_pairs(&[("COINGECKO_PER_PAGE", "many")]).is_err());
        assert!(from_pairs(&[("POSTGRES_PORT", "99999")]).is_err());
        assert!(from_pairs(&[("ETL_LISTEN_ADDR", "nowhere")]).is_err());
        assert!(from_pairs(&[("ETL_INTERVAL_SECS", "0")]).is_err());
    }
}
