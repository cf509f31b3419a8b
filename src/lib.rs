//! # Shortlink
//!
//! A URL shortening service built with Axum: mint a short code for a long
//! URL, redirect visitors, and count visits asynchronously.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entities, store/counter traits, visit worker
//! - **Application Layer** ([`application`]) - The shortener service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, memory and Redis counters
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/api/links -d '{"long_url":"https://example.com"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreateLink, ShortenerConfig, ShortenerService};
    pub use crate::domain::entities::{LinkEntry, NewLinkEntry};
    pub use crate::domain::repositories::{CounterError, LinkStore, StoreError, VisitCounter};
    pub use crate::domain::visit_event::VisitEvent;
    pub use crate::domain::visit_worker::{VisitWorkerConfig, run_visit_worker};
    pub use crate::error::AppError;
    pub use crate::infrastructure::counter::MemoryVisitCounter;
    pub use crate::infrastructure::persistence::MemoryLinkStore;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, GeneratorError, RandomCodeGenerator};
}
