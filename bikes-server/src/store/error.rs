//! Document store error types.

/// Errors from the document store.
///
/// All variants except `Conflict` are faults: the repository logs them
/// and serves its fallback snapshot instead of propagating.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing API key
    #[error("unauthorized: check the document store api key")]
    Unauthorized,

    /// Store returned an error status
    #[error("document store error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A document with this id already exists
    #[error("document already exists")]
    Conflict,
}
