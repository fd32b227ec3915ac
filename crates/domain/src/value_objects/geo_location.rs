//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

impl From<InvalidCoordinates> for DomainError {
    fn from(_: InvalidCoordinates) -> Self {
        Self::InvalidCoordinates
    }
}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted constants)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinates rounded to `decimals` places
    ///
    /// MET Norway asks clients to send at most four decimals so responses
    /// can be cached by their CDN.
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        Self {
            latitude: (self.latitude * factor).round() / factor,
            longitude: (self.longitude * factor).round() / factor,
        }
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Known office locations
impl GeoLocation {
    /// Stavanger office (the dashboard's default forecast point)
    #[must_use]
    pub const fn stavanger() -> Self {
        Self::new_unchecked(58.91, 5.72)
    }

    /// Oslo, Norway
    #[must_use]
    pub const fn oslo() -> Self {
        Self::new_unchecked(59.9139, 10.7522)
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::stavanger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location_is_created() {
        let loc = GeoLocation::new(58.91, 5.72).unwrap();
        assert!((loc.latitude() - 58.91).abs() < f64::EPSILON);
        assert!((loc.longitude() - 5.72).abs() < f64::EPSILON);
    }

    #[test]
    fn boundaries_are_accepted() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(GeoLocation::new(90.5, 0.0), Err(InvalidCoordinates));
        assert_eq!(GeoLocation::new(0.0, -180.5), Err(InvalidCoordinates));
    }

    #[test]
    fn rounded_keeps_four_decimals() {
        let loc = GeoLocation::new_unchecked(58.912_345, 5.719_99).rounded(4);
        assert!((loc.latitude() - 58.9123).abs() < 1e-9);
        assert!((loc.longitude() - 5.72).abs() < 1e-9);
    }

    #[test]
    fn display_uses_four_decimals() {
        assert_eq!(GeoLocation::stavanger().to_string(), "58.9100, 5.7200");
    }

    #[test]
    fn default_is_stavanger() {
        assert_eq!(GeoLocation::default(), GeoLocation::stavanger());
    }

    #[test]
    fn invalid_coordinates_converts_to_domain_error() {
        let err: DomainError = InvalidCoordinates.into();
        assert_eq!(err, DomainError::InvalidCoordinates);
    }

    #[test]
    fn serialization_roundtrip() {
        let loc = GeoLocation::oslo();
        let json = serde_json::to_string(&loc).unwrap();
        assert!(json.contains("latitude"));
        let back: GeoLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }
}
