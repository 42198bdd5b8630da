use axum::{
    Json,
    extract::{Path, rejection::JsonRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use super::ApiError;
use crate::export::{self, ExportFormat};
use crate::models::Script;

/// `POST /api/export/{format}`
///
/// Encodes a previously generated script as a downloadable `json` or `txt` file.
pub async fn export_script(
    Path(format): Path<String>,
    payload: Result<Json<Script>, JsonRejection>,
) -> Result<Response, ApiError> {
    let format = ExportFormat::parse(&format)?;
    let Json(script) = payload?;

    let body = export::render(&script, format)?;
    let disposition = content_disposition(&export::file_name(&script, format))?;

    tracing::debug!(format = format.extension(), bytes = body.len(), "Exported script");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(format.content_type()),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// Attachment header with an ASCII `filename` plus the exact UTF-8 name in `filename*`.
fn content_disposition(file_name: &str) -> Result<HeaderValue, ApiError> {
    let ascii: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii,
        urlencoding::encode(file_name)
    );

    HeaderValue::from_str(&value).map_err(|e| ApiError::internal(e.to_string()))
}
