//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`visit_event`] - Visit counting event model
//! - [`visit_worker`] - Asynchronous visit processing worker
//!
//! # Visit Processing Flow
//!
//! 1. A redirect resolves a live short code
//! 2. A [`visit_event::VisitEvent`] is pushed onto a bounded channel
//! 3. [`visit_worker::run_visit_worker`] applies it with retry and a timeout
//! 4. The count lands in a [`repositories::VisitCounter`]

pub mod entities;
pub mod repositories;
pub mod visit_event;
pub mod visit_worker;
