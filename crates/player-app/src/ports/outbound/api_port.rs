//! Errors surfaced by the HTTP boundary.

/// Failure of a single round trip to the request store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, CORS...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// The store answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    /// HTTP status code, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
