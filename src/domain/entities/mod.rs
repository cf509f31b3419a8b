//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLinkEntry`] is what the service hands to a store, [`LinkEntry`] is
//! what the store hands back once it has assigned `id` and `created_at`.

pub mod link;

pub use link::{LinkEntry, NewLinkEntry};
