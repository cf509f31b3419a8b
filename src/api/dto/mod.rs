//! Data Transfer Objects for the HTTP API.
//!
//! - [`links`] - Link creation request/response
//! - [`stats`] - Visit statistics
//! - [`health`] - Health check

pub mod health;
pub mod links;
pub mod stats;
