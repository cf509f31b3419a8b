//! Infrastructure layer for storage backends.
//!
//! This layer implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`counter`] - Visit counter backends (in-memory and Redis)
//! - [`persistence`] - Link store backends

pub mod counter;
pub mod persistence;
