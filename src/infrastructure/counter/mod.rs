//! Visit counter backends.
//!
//! Provides two [`crate::domain::repositories::VisitCounter`] implementations:
//! - [`MemoryVisitCounter`] - in-process reference counter
//! - [`RedisVisitCounter`] - shared counter for multi-instance deployments

mod memory_counter;
mod redis_counter;

pub use memory_counter::MemoryVisitCounter;
pub use redis_counter::RedisVisitCounter;
