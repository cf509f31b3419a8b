//! Counter trait for per-code visit tallies.

use std::time::Duration;

use async_trait::async_trait;

/// Errors surfaced by a [`VisitCounter`].
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("visit counter operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("visit counter backend error: {0}")]
    Backend(String),
}

/// Fast, eventually-consistent visit counter keyed by short code.
///
/// Counts are monotonically non-decreasing. A key that was never incremented
/// reads as zero.
///
/// # Implementations
///
/// - [`crate::infrastructure::counter::MemoryVisitCounter`] - in-process reference counter
/// - [`crate::infrastructure::counter::RedisVisitCounter`] - Redis `INCR`-backed counter
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitCounter: Send + Sync {
    /// Adds one to the count for `short_code`, creating it if absent.
    ///
    /// Must be atomic per key: concurrent callers never lose updates.
    async fn increment(&self, short_code: &str) -> Result<(), CounterError>;

    /// Returns the current count for `short_code`; absent keys read as 0.
    async fn get(&self, short_code: &str) -> Result<u64, CounterError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), CounterError>;
}
