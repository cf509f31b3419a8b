//! Handler for visit statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::debug;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the visit count for a short code.
///
/// # Endpoint
///
/// `GET /api/links/{short_code}/stats`
///
/// A code that was never created (or never visited) reports `{"visits": 0}`.
/// The count trails redirects by the time the background worker needs to
/// apply them. A segment that does not decode to UTF-8 can never have been
/// visited and also reports zero.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the visit counter fails.
pub async fn stats_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let Path(short_code) = match path {
        Ok(path) => path,
        Err(e) => {
            debug!(reason = %e.body_text(), "Stats path is not a short code");
            return Ok(Json(StatsResponse { visits: 0 }));
        }
    };

    let visits = state.shortener.stats(&short_code).await?;
    Ok(Json(StatsResponse { visits }))
}
