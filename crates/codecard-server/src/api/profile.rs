//! Profile routes: the JSON relay and the SVG card export.
//!
//! Both routes share the soft-failure contract: the body is always a
//! complete summary (or its card), and a degraded fetch is signaled
//! out-of-band through a 500 status for monitoring.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};

use codecard_core::Platform;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

fn parse_platform(raw: &str, request_id: &str) -> Result<Platform, ApiError> {
    raw.parse::<Platform>().map_err(|e| {
        ApiError::new(request_id.to_owned(), "not_found", e.to_string())
    })
}

fn relay_status(degraded: bool) -> StatusCode {
    if degraded {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

/// `GET /api/{platform}/{username}` — the normalized summary as JSON.
///
/// A degraded fetch still returns a well-formed body (the placeholder
/// record) under status 500.
pub(super) async fn get_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((platform, username)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let platform = parse_platform(&platform, &req_id.0)?;
    let outcome = state.fetcher.fetch(platform, &username).await;
    Ok((relay_status(outcome.degraded), Json(outcome.summary)).into_response())
}

/// `GET /api/{platform}/{username}/card` — the exported SVG card.
///
/// Served as an attachment under the canonical
/// `{platform}-profile-card.svg` file name.
pub(super) async fn get_card(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((platform, username)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let platform = parse_platform(&platform, &req_id.0)?;
    let outcome = state.fetcher.fetch(platform, &username).await;
    let svg = codecard_render::export(&outcome.summary).to_svg();
    let disposition = format!(
        "attachment; filename=\"{}\"",
        codecard_render::export_file_name(platform)
    );

    Ok((
        relay_status(outcome.degraded),
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        svg,
    )
        .into_response())
}
