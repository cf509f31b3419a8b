//! Link store implementations.
//!
//! - [`MemoryLinkStore`] - in-process reference store

mod memory_link_store;

pub use memory_link_store::MemoryLinkStore;
