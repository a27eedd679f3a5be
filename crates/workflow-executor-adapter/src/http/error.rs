/*
[INPUT]:  Error sources (HTTP transport, backend status, URL)
[OUTPUT]: Structured error type for backend submissions
[POS]:    Error handling layer - unified error type for the adapter crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the executor adapter
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExecutorError {
    /// Check if the request hit the connect or read timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ExecutorError::Http(err) if err.is_timeout())
    }

    /// Status code returned by the backend, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ExecutorError::Api { code, .. } => StatusCode::from_u16(*code).ok(),
            ExecutorError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        ExecutorError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, ExecutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ExecutorError::api_error(StatusCode::BAD_GATEWAY, "upstream down");
        match &err {
            ExecutorError::Api { code, message } => {
                assert_eq!(*code, 502);
                assert_eq!(message, "upstream down");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_api_error_display() {
        let err = ExecutorError::api_error(StatusCode::NOT_FOUND, "no such route");
        assert_eq!(err.to_string(), "API error (code 404): no such route");
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = ExecutorError::Config("empty backend url".to_string());
        assert_eq!(err.status(), None);
    }
}
