//! Destination URL validation.
//!
//! Validation is shape-only: the URL must parse, use `http` or
//! `https`, and name a host. Host policy (private ranges, blocklists) belongs
//! to a layer above the core.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must not have leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a destination URL and returns its parsed form.
///
/// The caller keeps storing the submitted string; the parsed [`Url`] is
/// returned for callers that need a canonical serialization.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::SurroundingWhitespace`] for input with leading or
///   trailing whitespace
/// - [`UrlValidationError::InvalidFormat`] when the input does not parse
/// - [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
///   such as `ftp:`, `javascript:`, `data:`
/// - [`UrlValidationError::MissingHost`] when no host is present
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com/a").is_ok());
/// assert_eq!(validate_long_url("ftp://x"), Err(UrlValidationError::UnsupportedProtocol));
/// ```
pub fn validate_long_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // `Url::parse` would strip it, but the submitted text is what gets stored.
    if input.trim() != input {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    let url = Url::parse(input).map_err(|e| match e {
        url::ParseError::EmptyHost => UrlValidationError::MissingHost,
        other => UrlValidationError::InvalidFormat(other.to_string()),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
