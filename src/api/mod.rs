//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into shortener operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - API sub-router

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
