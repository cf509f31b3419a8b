//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::reserved::is_short_code_candidate;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Reject segments that cannot be a short code (reserved words, foreign
///    characters, oversized) without a store lookup
/// 2. Resolve through the shortener, which enforces expiry
/// 3. The visit is queued for the background worker and never awaited
/// 4. Return 302 Found with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, expired, or not a short code
/// (including segments that do not percent-decode to UTF-8).
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(short_code) = path.map_err(|e| {
        AppError::not_found("Short link not found", json!({ "reason": e.body_text() }))
    })?;

    if !is_short_code_candidate(&short_code) {
        debug!(path = %short_code, "Path segment is not a short code");
        return Err(AppError::not_found("Short link not found", json!({})));
    }

    let entry = state.shortener.resolve(&short_code).await?;

    let location = location_header(&entry.long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Builds the `Location` value, falling back to the URL's percent-encoded
/// serialization when the stored text is not plain ASCII.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if long_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(long_url)
    {
        return Ok(value);
    }

    url::Url::parse(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL is not a valid Location header",
                json!({ "long_url": long_url }),
            )
        })
}
