//! Store trait for durable short-link persistence.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{LinkEntry, NewLinkEntry};

/// Errors surfaced by a [`LinkStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The short code is already taken. Authoritative: callers must not
    /// re-check with a read.
    #[error("short code already exists: {0}")]
    Conflict(String),

    #[error("link not found")]
    NotFound,

    #[error("link store is closed")]
    Closed,

    #[error("link store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("link store backend error: {0}")]
    Backend(String),
}

/// Durable mapping `short_code -> LinkEntry` with a uniqueness guarantee on
/// `short_code`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-process reference store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_memory.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Persists a new entry and returns it with `id` and `created_at` set.
    ///
    /// Atomic with respect to concurrent saves of the same `short_code`: at
    /// most one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the short code already exists.
    async fn save(&self, entry: NewLinkEntry) -> Result<LinkEntry, StoreError>;

    /// Returns a copy of the entry stored under `short_code`.
    ///
    /// Once `save` has returned successfully, a subsequent call observes the
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry exists.
    async fn find_by_short_code(&self, short_code: &str) -> Result<LinkEntry, StoreError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases backend resources. Idempotent.
    async fn close(&self) -> Result<(), StoreError>;
}
