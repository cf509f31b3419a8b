//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: validation, the collision-retry
//! loop, expiry policy, and the hand-off of visits to the background worker.
//! Handlers call into it and map its [`crate::error::AppError`]s to HTTP.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Create, Resolve, and Stats

pub mod services;
