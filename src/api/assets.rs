//! Embedded single-page form.

use axum::{
    body::Body,
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::ApiError;

#[derive(RustEmbed)]
#[folder = "ui"]
struct Asset;

const INDEX: &str = "index.html";

/// Serves files from `ui/`. Extension-less paths get the form page; a missing
/// file with an extension is a 404.
pub async fn serve_asset(uri: Uri) -> Result<Response, ApiError> {
    let path = uri.path().trim_start_matches('/');

    if path.starts_with("api/") {
        return Err(ApiError::not_found("Route", uri.path()));
    }

    let path = if path.is_empty() { INDEX } else { path };

    if let Some(response) = embedded(path) {
        return Ok(response);
    }

    let has_extension = path
        .rsplit('/')
        .next()
        .is_some_and(|name| name.contains('.'));

    if has_extension {
        return Err(ApiError::not_found("Asset", path));
    }

    embedded(INDEX).ok_or_else(|| ApiError::not_found("Asset", INDEX))
}

fn embedded(path: &str) -> Option<Response> {
    let content = Asset::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let cache_control = if path == INDEX {
        "no-cache"
    } else {
        "public, max-age=3600"
    };

    Some(
        (
            [
                (header::CONTENT_TYPE, mime.as_ref()),
                (header::CACHE_CONTROL, cache_control),
            ],
            Body::from(content.data),
        )
            .into_response(),
    )
}
