use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coinetl_core::{LoadReport, MarketStoreTrait, Result};
use coinetl_market_data::RawMarketRecord;
use sqlx::{Connection, PgConnection};
use tracing::{debug, error, info, warn};

use crate::errors::StorageError;
use crate::schema::{COUNT_MARKET_ROWS, CREATE_MARKET_TABLE, INSERT_MARKET_ROW};
use crate::settings::PostgresSettings;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Convert the upstream `last_updated` string for the TIMESTAMPTZ column.
///
/// Returns `None` (stored as NULL) when the value is not RFC 3339.
pub fn parse_last_updated(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Appends raw market records to `coin_market_raw`.
///
/// A connection is opened per load and closed afterwards.
pub struct PgMarketStore {
    settings: PostgresSettings,
    connect_timeout: Duration,
}

impl PgMarketStore {
    pub fn new(settings: PostgresSettings) -> Self {
        Self {
            settings,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    async fn connect(&self) -> std::result::Result<PgConnection, StorageError> {
        let options = self.settings.connect_options();
        match tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&options))
            .await
        {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(StorageError::ConnectionFailed(e)),
            Err(_) => Err(StorageError::ConnectTimeout(self.connect_timeout)),
        }
    }

    async fn insert_record(
        conn: &mut PgConnection,
        record: &RawMarketRecord,
    ) -> std::result::Result<(), StorageError> {
        sqlx::query(INSERT_MARKET_ROW)
            .bind(&record.id)
            .bind(&record.symbol)
            .bind(&record.name)
            .bind(record.image.as_deref())
            .bind(record.current_price)
            .bind(record.market_cap)
            .bind(record.market_cap_rank)
            .bind(record.total_volume)
            .bind(record.high_24h)
            .bind(record.low_24h)
            .bind(record.price_change_24h)
            .bind(record.price_change_percentage_24h)
            .bind(parse_last_updated(&record.last_updated))
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn load_with(
        &self,
        conn: &mut PgConnection,
        records: &[RawMarketRecord],
    ) -> std::result::Result<LoadReport, StorageError> {
        sqlx::query(CREATE_MARKET_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::SchemaFailed)?;

        let mut report = LoadReport::default();
        for record in records {
            match Self::insert_record(conn, record).await {
                Ok(()) => report.inserted += 1,
                Err(e) => {
                    error!("Insert failed for {}: {}", record.id, e);
                    report.failed += 1;
                }
            }
        }

        match sqlx::query_scalar::<_, i64>(COUNT_MARKET_ROWS)
            .fetch_one(&mut *conn)
            .await
        {
            Ok(count) => {
                info!("Total records in Postgres: {}", count);
                report.total_rows = Some(count);
            }
            Err(e) => error!("Failed to validate row count: {}", e),
        }

        info!(
            "Inserted {} records into Postgres ({} failed)",
            report.inserted, report.failed
        );
        Ok(report)
    }
}

#[async_trait]
impl MarketStoreTrait for PgMarketStore {
    async fn load(&self, records: &[RawMarketRecord]) -> Result<LoadReport> {
        let mut conn = self.connect().await.map_err(|e| {
            error!("Postgres connection failed: {}", e);
            e
        })?;
        debug!("Connected to Postgres at {}:{}", self.settings.host, self.settings.port);

        let result = self.load_with(&mut conn, records).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close Postgres connection: {}", e);
        }

        result.map_err(|e| {
            error!("Failed to load data into Postgres: {}", e);
            e.into()
        })
    }
}
