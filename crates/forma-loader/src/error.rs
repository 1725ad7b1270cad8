//! Loader error types.

use forma_core::ConfigViolation;
use thiserror::Error;

/// Errors that can occur while obtaining or validating a template document.
///
/// Load errors are never silently cached — a failed load leaves the cache
/// untouched so the next read retries.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The document store returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The store returned a 429 Too Many Requests response.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The fetched document could not be parsed into a template config.
    #[error("template '{id}' is malformed: {source}")]
    Parse {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed document violated structural invariants. Carries the full
    /// list so callers can report everything wrong in one pass.
    #[error("template '{id}' failed validation with {} violation(s)", violations.len())]
    Invalid {
        id: String,
        violations: Vec<ConfigViolation>,
    },

    /// The catalog index document was malformed.
    #[error("template index is malformed: {0}")]
    Index(String),
}
