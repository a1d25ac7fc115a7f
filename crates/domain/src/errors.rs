//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid longitude/latitude ranges
    #[error("Invalid coordinates: longitude {longitude}, latitude {latitude}")]
    InvalidCoordinates { longitude: f64, latitude: f64 },
}

impl DomainError {
    /// Create an invalid coordinates error
    pub const fn invalid_coordinates(longitude: f64, latitude: f64) -> Self {
        Self::InvalidCoordinates {
            longitude,
            latitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::invalid_coordinates(200.0, 95.0);
        assert_eq!(
            err.to_string(),
            "Invalid coordinates: longitude 200, latitude 95"
        );
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DomainError>();
    }
}
