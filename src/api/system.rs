//! System API endpoints: liveness and a status summary of what the generator supports.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiResponse, AppState, DurationDto, HealthResponse, StyleDto, SystemStatus};
use crate::models::{DurationBucket, Style};

/// `GET /api/system/health`
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "alive".to_string(),
    }))
}

/// `GET /api/system/status`
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SystemStatus>> {
    Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        metrics_enabled: state.prometheus_handle.is_some(),
        styles: Style::ALL.into_iter().map(StyleDto::from).collect(),
        fallback_style: Style::FALLBACK.as_str(),
        durations: DurationBucket::ALL.into_iter().map(DurationDto::from).collect(),
    }))
}
