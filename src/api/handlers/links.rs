//! Handler for link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/some/page",
///   "original_url": "https://example.com/some/page?utm=x",
///   "user_id": "u-42",
///   "expire_at": "2030-01-01T00:00:00Z"
/// }
/// ```
///
/// Only `long_url` is required.
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3xY9z",
///   "long_url": "https://example.com/some/page",
///   "original_url": "https://example.com/some/page?utm=x",
///   "created_at": "2026-10-14T09:30:00Z",
///   "expire_at": "2030-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed JSON, missing `long_url`, or invalid URL
/// - **409 Conflict**: no unique code found within the attempt budget
/// - **500 Internal Server Error**: store or generator failure
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let entry = state.shortener.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}
