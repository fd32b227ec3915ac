//! Office location configuration

use domain::{DomainError, GeoLocation};
use serde::{Deserialize, Serialize};

/// Where the office is; forecasts are fetched for this point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in degrees (default: 58.91, Stavanger)
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude in degrees (default: 5.72, Stavanger)
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Display name, shown in logs
    #[serde(default)]
    pub name: Option<String>,
}

const fn default_latitude() -> f64 {
    58.91
}

const fn default_longitude() -> f64 {
    5.72
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            name: None,
        }
    }
}

impl LocationConfig {
    /// Validated coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` when out of range.
    pub fn geo_location(&self) -> Result<GeoLocation, DomainError> {
        Ok(GeoLocation::new(self.latitude, self.longitude)?)
    }
}
