//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthz`       - Health check: store, counter, visit queue
//! - `/api/*`              - REST API
//! - `GET  /{short_code}`  - Short link redirect
//! - anything else         - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// `/healthz` and `/api` are registered as static routes, so they always win
/// over the `/{short_code}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .route("/{short_code}", get(redirect_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
