use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

use crate::{error::ApiResult, main_lib::AppState};

/// Prometheus text exposition of the ETL counters.
pub async fn metrics(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let body = state.metrics.render()?;
    Ok((
        [(header::CONTENT_TYPE, state.metrics.content_type())],
        body,
    ))
}
