//! Storage trait definitions for the domain layer.
//!
//! The service is written against these narrow interfaces; any backend that
//! honours their contracts can be plugged in.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Traits
//!
//! - [`LinkStore`] - durable, uniqueness-enforcing link persistence
//! - [`VisitCounter`] - per-code visit tallies

pub mod link_store;
pub mod visit_counter;

pub use link_store::{LinkStore, StoreError};
pub use visit_counter::{CounterError, VisitCounter};

#[cfg(test)]
pub use link_store::MockLinkStore;
#[cfg(test)]
pub use visit_counter::MockVisitCounter;
