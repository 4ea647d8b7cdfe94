//! Error types for the students REST client.

use roster_common::types::StudentId;
use thiserror::Error;

/// Errors produced by REST calls against the students service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("request failed: {source}")]
    Request {
        /// Underlying transport error.
        #[from]
        source: reqwest::Error,
    },

    /// The service reported that no record exists for the given ID.
    #[error("student not found: {id}")]
    NotFound {
        /// Identifier that failed to resolve.
        id: StudentId,
    },

    /// The service answered with an unexpected status code.
    #[error("unexpected status {code} from students service")]
    Status {
        /// HTTP status code of the response.
        code: u16,
    },
}

/// Convenience alias for REST client results.
pub type Result<T> = std::result::Result<T, ApiError>;
