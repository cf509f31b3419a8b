//! API route configuration.

use crate::api::handlers::{create_link_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /links`                     - Create a short link
/// - `GET  /links/{short_code}/stats`  - Visit count for a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{short_code}/stats", get(stats_handler))
}
