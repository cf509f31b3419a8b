//! Path segments that must never be treated as short codes.

use regex::Regex;
use std::sync::LazyLock;

/// First path segments owned by the service itself.
pub const RESERVED_SEGMENTS: &[&str] = &["api", "metrics", "debug", "healthz"];

/// Longest path segment the redirect route will look up.
pub const MAX_SHORT_CODE_LEN: usize = 64;

static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid short code regex"));

/// Returns true if `segment` is reserved for service endpoints.
pub fn is_reserved(segment: &str) -> bool {
    RESERVED_SEGMENTS.contains(&segment)
}

/// Returns true if `segment` could name a short code: non-empty, not
/// reserved, URL-safe characters only, and within the length limit.
pub fn is_short_code_candidate(segment: &str) -> bool {
    !segment.is_empty()
        && segment.len() <= MAX_SHORT_CODE_LEN
        && !is_reserved(segment)
        && SHORT_CODE_REGEX.is_match(segment)
}
