//! HTTP route handlers for the gallery.

use super::templates;
use crate::config::Config;
use crate::gallery;
use crate::image_proc::{OUTPUT_CONTENT_TYPE, Rotation, TransformRequest, render_thumbnail};
use axum::{
    extract::{Path as UrlPath, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// GET / - Gallery index page
///
/// Re-walks the tree on every request; nothing is cached, so there is
/// nothing to invalidate when files change.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let images: Vec<_> = gallery::descriptors(&state.config).collect();
    tracing::debug!("Index built with {} images", images.len());

    let root_label = state.config.gallery_root.to_string_lossy();
    Html(templates::render_index(&root_label, &images))
}

/// GET /{path} - Thumbnail or raw file
///
/// With parseable `w`, `h` and `r` query parameters the image is rotated,
/// shrunk to fit and re-encoded. With any of them missing or malformed the
/// raw file bytes are served unchanged. Either way a path that cannot be
/// resolved or decoded is a plain 404.
pub async fn image(
    State(state): State<AppState>,
    UrlPath(path): UrlPath<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(full_path) = resolve_path(&state.config.gallery_root, &path) else {
        tracing::debug!("Rejected request path {:?}", path);
        return StatusCode::NOT_FOUND.into_response();
    };

    match parse_transform(&params) {
        Some(request) => match render_thumbnail(&full_path, &request) {
            Ok(bytes) => ([(header::CONTENT_TYPE, OUTPUT_CONTENT_TYPE)], bytes).into_response(),
            Err(e) => {
                tracing::debug!("Transform failed for {}: {}", full_path.display(), e);
                StatusCode::NOT_FOUND.into_response()
            }
        },
        None => match std::fs::read(&full_path) {
            Ok(bytes) => {
                ([(header::CONTENT_TYPE, content_type_for(&full_path))], bytes).into_response()
            }
            Err(_) => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Extract transform parameters from the query string.
///
/// `None` selects the raw-file fallback: any parameter missing, not an
/// integer, or carrying a zero dimension. A rotation value other than
/// 0/90/180/270 collapses to no rotation.
fn parse_transform(params: &HashMap<String, String>) -> Option<TransformRequest> {
    let width: u32 = params.get("w")?.parse().ok()?;
    let height: u32 = params.get("h")?.parse().ok()?;
    let degrees: u16 = params.get("r")?.parse().ok()?;

    if width == 0 || height == 0 {
        return None;
    }

    Some(TransformRequest {
        width,
        height,
        rotation: Rotation::from(degrees),
    })
}

/// Join a request path onto the gallery root, rejecting anything that
/// could escape it (`..`, absolute paths, drive prefixes).
fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

/// Content type for raw file serves, inferred from the extension
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
