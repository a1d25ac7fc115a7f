//! OpenRouteService error types

use thiserror::Error;

/// Errors that can occur when talking to OpenRouteService
#[derive(Debug, Error)]
pub enum OrsError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl OrsError {
    /// Map a transport error, distinguishing timeouts
    pub(crate) fn from_transport(error: &reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrsError::RequestFailed { status: 404 };
        assert_eq!(err.to_string(), "Request failed: HTTP 404");

        let err = OrsError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));

        let err = OrsError::Timeout { timeout_secs: 60 };
        assert!(err.to_string().contains("60"));
    }
}
