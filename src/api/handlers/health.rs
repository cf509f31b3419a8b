//! Handler for health check endpoint.

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: A backend failed or missed its ping deadline,
///   or the visit queue is closed
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Responding" },
///     "counter": { "status": "ok", "message": "Responding" },
///     "visit_queue": { "status": "ok", "message": "Capacity: 10000" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (store_check, counter_check) = tokio::join!(check_store(&state), check_counter(&state));
    let queue_check = check_visit_queue(&state);

    let all_healthy = store_check.is_ok() && counter_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "ok" } else { "unavailable" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks {
            store: store_check,
            counter: counter_check,
            visit_queue: queue_check,
        },
    };

    let status = if all_healthy {
        StatusCode::OK
    } else {
        tracing::warn!("Health check failed");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

async fn check_store(state: &AppState) -> CheckStatus {
    match tokio::time::timeout(state.health_timeout, state.store.ping()).await {
        Ok(Ok(())) => CheckStatus::ok("Responding"),
        Ok(Err(e)) => CheckStatus::error(format!("Store error: {}", e)),
        Err(_) => CheckStatus::error(timed_out(state.health_timeout)),
    }
}

async fn check_counter(state: &AppState) -> CheckStatus {
    match tokio::time::timeout(state.health_timeout, state.counter.ping()).await {
        Ok(Ok(())) => CheckStatus::ok("Responding"),
        Ok(Err(e)) => CheckStatus::error(format!("Counter error: {}", e)),
        Err(_) => CheckStatus::error(timed_out(state.health_timeout)),
    }
}

/// Checks if the visit queue is still accepting events.
fn check_visit_queue(state: &AppState) -> CheckStatus {
    if state.visit_sender.is_closed() {
        CheckStatus::error("Visit queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", state.visit_sender.capacity()))
    }
}

fn timed_out(deadline: Duration) -> String {
    format!("No response within {}ms", deadline.as_millis())
}
