//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod links;
pub mod redirect;
pub mod stats;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use links::create_link_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
