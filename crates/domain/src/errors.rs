//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Sky-condition code is empty or contains no usable token
    #[error("Invalid sky code: {0:?}")]
    InvalidSkyCode(String),

    /// Business window bounds are out of order or outside 0-23
    #[error("Invalid business window: {start:02}:00-{end:02}:00")]
    InvalidBusinessWindow { start: u32, end: u32 },

    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sky_code_message_quotes_input() {
        let err = DomainError::InvalidSkyCode("  ".to_string());
        assert_eq!(err.to_string(), "Invalid sky code: \"  \"");
    }

    #[test]
    fn invalid_business_window_message_pads_hours() {
        let err = DomainError::InvalidBusinessWindow { start: 15, end: 9 };
        assert_eq!(err.to_string(), "Invalid business window: 15:00-09:00");
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("weights must be finite".to_string());
        assert_eq!(err.to_string(), "Validation failed: weights must be finite");
    }
}
