//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External service error (geocoding or directions backend)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_message() {
        let err = ApplicationError::ExternalService("Geocoding failed: HTTP 502".into());
        assert_eq!(
            err.to_string(),
            "External service error: Geocoding failed: HTTP 502"
        );
    }

    #[test]
    fn configuration_message() {
        let err = ApplicationError::Configuration("missing api key".into());
        assert_eq!(err.to_string(), "Configuration error: missing api key");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<ApplicationError>();
    }
}
