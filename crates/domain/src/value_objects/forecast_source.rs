//! Forecast data source selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::GeoLocation;

/// Where a forecast refresh reads its data from
///
/// Passed explicitly with every refresh so that switching sources never
/// leaves stale state behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ForecastSource {
    /// Fetch a fresh forecast for a location
    Live { location: GeoLocation },
    /// Read a previously saved forecast document
    Snapshot { path: PathBuf },
}

impl ForecastSource {
    /// Live source for a location
    #[must_use]
    pub const fn live(location: GeoLocation) -> Self {
        Self::Live { location }
    }

    /// Snapshot source for a file path
    #[must_use]
    pub fn snapshot(path: impl Into<PathBuf>) -> Self {
        Self::Snapshot { path: path.into() }
    }
}

impl fmt::Display for ForecastSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live { location } => write!(f, "live({location})"),
            Self::Snapshot { path } => write!(f, "snapshot({})", path.display()),
        }
    }
}
