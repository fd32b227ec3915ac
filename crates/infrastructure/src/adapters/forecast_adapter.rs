//! Forecast adapter - Implements ForecastPort using integration_metno

use std::path::Path;

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{ForecastEntry, ForecastSource, GeoLocation};
use integration_metno::{LocationForecastClient, MetNoClient, MetNoConfig, MetNoError, parse_classic};
use tracing::{debug, instrument};

/// Adapter for the MET Norway Locationforecast service
///
/// Live sources are fetched over HTTP; snapshot sources are read from disk
/// and go through the same document parser.
pub struct MetNoForecastAdapter {
    client: Box<dyn LocationForecastClient>,
}

impl std::fmt::Debug for MetNoForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetNoForecastAdapter")
            .field("client", &"LocationForecastClient")
            .finish()
    }
}

impl MetNoForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = MetNoClient::with_defaults().map_err(Self::map_error)?;
        Ok(Self::with_client(client))
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: MetNoConfig) -> Result<Self, ApplicationError> {
        let client = MetNoClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    #[must_use]
    pub fn with_client(client: impl LocationForecastClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Map integration error to application error
    fn map_error(err: MetNoError) -> ApplicationError {
        match err {
            MetNoError::ConnectionFailed(e)
            | MetNoError::RequestFailed(e)
            | MetNoError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            MetNoError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Unreadable forecast: {e}"))
            },
            MetNoError::InvalidCoordinates => {
                ApplicationError::InvalidInput("Invalid coordinates".into())
            },
            MetNoError::RateLimitExceeded => ApplicationError::RateLimited,
            MetNoError::Forbidden(e) => ApplicationError::Configuration(format!(
                "Forecast request rejected ({e}); check metno.user_agent"
            )),
        }
    }

    async fn fetch_live(&self, location: &GeoLocation) -> Result<Vec<ForecastEntry>, ApplicationError> {
        self.client
            .get_entries(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)
    }

    async fn read_snapshot(path: &Path) -> Result<Vec<ForecastEntry>, ApplicationError> {
        let xml = tokio::fs::read_to_string(path).await.map_err(|e| {
            ApplicationError::InvalidInput(format!("Cannot read {}: {e}", path.display()))
        })?;
        parse_classic(&xml).map_err(|e| {
            ApplicationError::InvalidInput(format!("Cannot parse {}: {e}", path.display()))
        })
    }
}

#[async_trait]
impl ForecastPort for MetNoForecastAdapter {
    #[instrument(skip(self, source), fields(source = %source))]
    async fn fetch_entries(
        &self,
        source: &ForecastSource,
    ) -> Result<Vec<ForecastEntry>, ApplicationError> {
        let result = match source {
            ForecastSource::Live { location } => self.fetch_live(location).await,
            ForecastSource::Snapshot { path } => Self::read_snapshot(path).await,
        };

        match &result {
            Ok(entries) => {
                debug!(entries = entries.len(), "Retrieved forecast entries");
            },
            Err(e) => {
                debug!(error = %e, "Failed to retrieve forecast entries");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INSTANT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<weatherdata created="2025-06-02T06:00:00Z">
  <product class="pointData">
    <time datatype="forecast" from="2025-06-02T10:00:00Z" to="2025-06-02T10:00:00Z">
      <location altitude="30" latitude="58.9100" longitude="5.7200">
        <temperature id="TTT" unit="celsius" value="14.2"/>
        <windSpeed id="ff" mps="1.4"/>
      </location>
    </time>
  </product>
</weatherdata>"#;

    #[test]
    fn new_creates_adapter() {
        assert!(MetNoForecastAdapter::new().is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = MetNoForecastAdapter::new().unwrap();
        assert!(format!("{adapter:?}").contains("MetNoForecastAdapter"));
    }

    #[test]
    fn map_error_transport() {
        assert!(matches!(
            MetNoForecastAdapter::map_error(MetNoError::ConnectionFailed("refused".into())),
            ApplicationError::ExternalService(_)
        ));
        assert!(matches!(
            MetNoForecastAdapter::map_error(MetNoError::ServiceUnavailable("HTTP 503".into())),
            ApplicationError::ExternalService(_)
        ));
        assert!(matches!(
            MetNoForecastAdapter::map_error(MetNoError::ParseError("eof".into())),
            ApplicationError::ExternalService(m) if m.contains("eof")
        ));
    }

    #[test]
    fn map_error_rate_limit() {
        let err = MetNoForecastAdapter::map_error(MetNoError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited));
        assert!(err.is_retryable());
    }

    #[test]
    fn map_error_forbidden_points_at_user_agent() {
        let err = MetNoForecastAdapter::map_error(MetNoError::Forbidden("HTTP 403".into()));
        assert!(matches!(err, ApplicationError::Configuration(ref m) if m.contains("user_agent")));
        assert!(!err.is_retryable());
    }

    #[test]
    fn map_error_invalid_coordinates() {
        assert!(matches!(
            MetNoForecastAdapter::map_error(MetNoError::InvalidCoordinates),
            ApplicationError::InvalidInput(_)
        ));
    }

    #[tokio::test]
    async fn snapshot_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INSTANT.as_bytes()).unwrap();

        let adapter = MetNoForecastAdapter::new().unwrap();
        let entries = adapter
            .fetch_entries(&ForecastSource::snapshot(file.path()))
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].temperature_c, Some(14.2));
    }

    #[tokio::test]
    async fn missing_snapshot_is_invalid_input() {
        let adapter = MetNoForecastAdapter::new().unwrap();
        let result = adapter
            .fetch_entries(&ForecastSource::snapshot("/nonexistent/forecast.xml"))
            .await;

        assert!(matches!(result, Err(ApplicationError::InvalidInput(m)) if m.contains("Cannot read")));
    }

    #[tokio::test]
    async fn malformed_snapshot_is_invalid_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<weatherdata><product></weatherdata>").unwrap();

        let adapter = MetNoForecastAdapter::new().unwrap();
        let result = adapter
            .fetch_entries(&ForecastSource::snapshot(file.path()))
            .await;

        assert!(matches!(result, Err(ApplicationError::InvalidInput(m)) if m.contains("Cannot parse")));
    }
}
