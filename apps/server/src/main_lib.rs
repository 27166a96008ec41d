use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use coinetl_core::{CycleRunner, CycleRunnerTrait, FileSnapshotSink};
use coinetl_market_data::{CoinGeckoProvider, EtlMetrics};
use coinetl_storage_postgres::PgMarketStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub metrics: Arc<EtlMetrics>,
    pub cycle_runner: Arc<dyn CycleRunnerTrait>,
}

/// Console logging in text or JSON, plus an optional plain-text copy appended
/// to `config.log_file`.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = config.log_format.eq_ignore_ascii_case("json");

    let json_layer = json.then(|| fmt::layer().json().with_current_span(false));
    let text_layer = (!json).then(|| fmt::layer().with_target(true).with_line_number(true));

    let file_layer = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()?;
    Ok(())
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let metrics = Arc::new(EtlMetrics::new()?);

    let provider = Arc::new(CoinGeckoProvider::new(
        config.coingecko.clone(),
        metrics.clone(),
    )?);
    tracing::info!(
        "Fetching from {} ({} per page, vs {})",
        config.coingecko.base_url,
        config.coingecko.per_page,
        config.coingecko.vs_currency
    );

    let snapshots = Arc::new(FileSnapshotSink::new(&config.data_dir));
    tracing::info!("Snapshot directory in use: {}", config.data_dir.display());

    let store = Arc::new(PgMarketStore::new(config.postgres.clone()));
    tracing::info!(
        "Loading into postgres at {}:{}/{}",
        config.postgres.host,
        config.postgres.port,
        config.postgres.database
    );

    let cycle_runner: Arc<dyn CycleRunnerTrait> =
        Arc::new(CycleRunner::new(provider, snapshots, store));

    Ok(Arc::new(AppState {
        metrics,
        cycle_runner,
    }))
}
