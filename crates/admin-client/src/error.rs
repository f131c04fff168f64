//! Error Types
//!
//! Every failure the dashboard can hit while talking to the backend.
//!
//! ```text
//! Network      - request never produced a response
//! Unauthorized - 401, session already reset by the transport
//! Status       - any other non-2xx answer
//! Malformed    - 2xx answer whose body is not the expected shape
//! Encode       - request body could not be serialized
//! ```
//!
//! None of these ever reach the view tree: screens turn them into toasts.

use thiserror::Error;

/// Failures of a backend call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection, aborted fetch.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered 401. Stored credentials are gone by the time
    /// the caller sees this.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any non-2xx status other than 401.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be read as the expected payload.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// Request body serialization failed.
    #[error("Encode error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Whether the failure is about the payload rather than the exchange.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ApiError::Malformed(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_carries_code_and_body() {
        let err = ApiError::Status { status: 500, body: "boom".into() };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_json_errors_become_malformed() {
        let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(err.is_malformed());
    }
}
