//! DTO for the visit statistics endpoint.

use serde::Serialize;

/// Response body for `GET /api/links/{short_code}/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub visits: u64,
}
