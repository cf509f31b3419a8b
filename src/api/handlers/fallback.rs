//! Handler for unmatched routes.

use axum::{Json, http::StatusCode};

use crate::error::ErrorBody;

/// Answers every unmatched route, including `/`, with a JSON 404.
pub async fn not_found_handler() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}
