use std::fmt::Display;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use coinetl_market_data::{ProjectedMarketRecord, RawMarketRecord};
use log::info;
use serde::Serialize;

use super::traits::SnapshotSinkTrait;
use crate::errors::{Error, Result};

pub const RAW_DIR: &str = "raw";
pub const PROCESSED_DIR: &str = "processed";

/// File name for a snapshot taken at `at`, to the second.
///
/// Two snapshots within the same second share a name and the later one
/// overwrites the earlier.
pub fn snapshot_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("market_{}.json", at.format("%Y-%m-%dT%H-%M-%S"))
}

/// Writes pretty-printed JSON snapshots under `<root>/raw` and
/// `<root>/processed`, creating the directories as needed.
#[derive(Clone, Debug)]
pub struct FileSnapshotSink {
    root: PathBuf,
}

impl FileSnapshotSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(RAW_DIR)
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.root.join(PROCESSED_DIR)
    }
}

async fn write_snapshot<T: Serialize + Sync>(dir: &Path, records: &[T]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| Error::io(dir, e))?;

    let path = dir.join(snapshot_file_name(&Local::now()));

    let mut body = serde_json::to_vec_pretty(records)?;
    body.push(b'\n');

    tokio::fs::write(&path, body)
        .await
        .map_err(|e| Error::io(&path, e))?;

    Ok(path)
}

#[async_trait]
impl SnapshotSinkTrait for FileSnapshotSink {
    async fn save_raw(&self, records: &[RawMarketRecord]) -> Result<PathBuf> {
        let path = write_snapshot(&self.raw_dir(), records).await?;
        info!("Saved raw data to {}", path.display());
        Ok(path)
    }

    async fn save_processed(&self, records: &[ProjectedMarketRecord]) -> Result<PathBuf> {
        let path = write_snapshot(&self.processed_dir(), records).await?;
        info!("Saved processed data to {}", path.display());
        Ok(path)
    }
}
