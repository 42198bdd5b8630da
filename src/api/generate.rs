use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;
use tracing::info;

use super::{ApiError, AppState};
use crate::models::{GenerationRequest, Script};

/// `POST /api/generate`
///
/// Responds with the bare script document rather than the `ApiResponse`
/// envelope, so the form can render and export it unchanged.
pub async fn generate_script(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<Script>, ApiError> {
    let Json(request) = payload?;

    let script = state.generator.generate(&request);

    let style = request.style().map_or("unknown", |s| s.as_str());
    let duration = request.duration_bucket();

    metrics::counter!(
        "scripts_generated_total",
        "estilo" => style,
        "duracao" => duration.as_str()
    )
    .increment(1);

    info!(
        event = "script_generated",
        estilo = style,
        duracao = %duration,
        scenes = script.scenes.len(),
        "Generated script \"{}\"",
        script.title
    );

    Ok(Json(script))
}
