mod health;
mod metrics;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::error::ApiError;
use crate::main_lib::AppState;

async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/metrics", get(metrics::metrics))
        .fallback(not_found)
        .with_state(state)
}
