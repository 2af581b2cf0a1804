//! Errors raised by the URL registry.

use thiserror::Error;

/// Failure of a registry operation.
///
/// Every variant leaves the registry exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The submitted string is not an acceptable absolute URL.
    #[error("Invalid URL format: {url}")]
    InvalidUrl { url: String },

    /// No live record uses this short code.
    #[error("Short code not found: {code}")]
    NotFound { code: String },

    /// Every generated candidate collided with an existing code.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}
