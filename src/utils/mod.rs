//! Utility functions for code generation, URL validation, and path rules.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Destination URL shape validation
//! - [`reserved`] - Reserved path segments and short-code shape checks

pub mod code_generator;
pub mod reserved;
pub mod url_validator;
