//! Forecast retrieval port
//!
//! Defines how the application obtains raw forecast entries. Transport and
//! document parsing live behind this trait.

use async_trait::async_trait;
use domain::{ForecastEntry, ForecastSource};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch every forecast entry the source offers
    ///
    /// Entries are returned in document order; callers must not rely on it.
    async fn fetch_entries(
        &self,
        source: &ForecastSource,
    ) -> Result<Vec<ForecastEntry>, ApplicationError>;

    /// Check if the live forecast service is reachable
    async fn is_available(&self) -> bool;
}
