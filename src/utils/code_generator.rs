//! Short code generation.
//!
//! Codes are drawn from the operating system's CSPRNG and encoded as URL-safe
//! base64. The two non-alphanumeric symbols of that alphabet are substituted
//! (`-` becomes `B`, `_` becomes `A`), so every code is plain `[A-Za-z0-9]`.
//! Uniqueness is not checked here; the link store decides that.

use base64::Engine as _;

/// Errors that can occur while generating a short code.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("random source failure: {0}")]
    RandomSource(String),

    #[error("requested code length must be at least 1")]
    ZeroLength,
}

/// Produces candidate short codes.
///
/// Implementations must be safe to share across request handlers.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a code of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the random source fails or `length` is 0.
    fn generate(&self, length: usize) -> Result<String, GeneratorError>;
}

/// Default generator backed by `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> Result<String, GeneratorError> {
        generate_code(length)
    }
}

/// Generates a cryptographically secure random code of `length` characters.
///
/// Draws `length` random bytes, which base64-encodes to more than `length`
/// characters, and keeps the first `length` of them.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7)?;
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> Result<String, GeneratorError> {
    if length == 0 {
        return Err(GeneratorError::ZeroLength);
    }

    let mut buffer = vec![0u8; length];
    getrandom::fill(&mut buffer).map_err(|e| GeneratorError::RandomSource(e.to_string()))?;

    let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);

    Ok(encoded
        .chars()
        .take(length)
        .map(|c| match c {
            '-' => 'B',
            '_' => 'A',
            other => other,
        })
        .collect())
}
