//! MET Norway Locationforecast client
//!
//! HTTP client for the Locationforecast 2.0 "classic" endpoint.

use async_trait::async_trait;
use domain::ForecastEntry;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::classic::parse_classic;

/// MET Norway client errors
#[derive(Debug, Error)]
pub enum MetNoError {
    /// Connection to the forecast service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the forecast document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request rejected, usually for a missing or generic User-Agent
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

/// Locationforecast configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetNoConfig {
    /// API base URL (default: <https://api.met.no/weatherapi/locationforecast/2.0>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifying User-Agent; met.no rejects generic ones (default: KontorTemp/1.0)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Ground altitude in metres, improves temperature accuracy (default: 30)
    #[serde(default = "default_altitude")]
    pub altitude: Option<i32>,
}

fn default_base_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0".to_string()
}

fn default_user_agent() -> String {
    "KontorTemp/1.0".to_string()
}

const fn default_timeout() -> u64 {
    30
}

#[allow(clippy::unnecessary_wraps)]
const fn default_altitude() -> Option<i32> {
    Some(30)
}

impl Default for MetNoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            altitude: default_altitude(),
        }
    }
}

/// Locationforecast client trait
#[async_trait]
pub trait LocationForecastClient: Send + Sync {
    /// Fetch the raw classic XML document for a location
    async fn fetch_classic(&self, latitude: f64, longitude: f64) -> Result<String, MetNoError>;

    /// Fetch and parse the forecast for a location
    async fn get_entries(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastEntry>, MetNoError> {
        let xml = self.fetch_classic(latitude, longitude).await?;
        parse_classic(&xml)
    }

    /// Check if the forecast service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Locationforecast HTTP client implementation
#[derive(Debug)]
pub struct MetNoClient {
    client: Client,
    config: MetNoConfig,
}

impl MetNoClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: MetNoConfig) -> Result<Self, MetNoError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| MetNoError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, MetNoError> {
        Self::new(MetNoConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), MetNoError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(MetNoError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Round to the 4 decimals met.no accepts; more precision is a 403
    fn round_coordinate(value: f64) -> f64 {
        (value * 10_000.0).round() / 10_000.0
    }

    /// Query parameters for a classic request
    fn query(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(3);
        if let Some(altitude) = self.config.altitude {
            query.push(("altitude", altitude.to_string()));
        }
        query.push(("lat", Self::round_coordinate(latitude).to_string()));
        query.push(("lon", Self::round_coordinate(longitude).to_string()));
        query
    }

    fn classic_url(&self) -> String {
        format!("{}/classic", self.config.base_url.trim_end_matches('/'))
    }

    fn check_status(status: StatusCode) -> Result<(), MetNoError> {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MetNoError::RateLimitExceeded);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(MetNoError::Forbidden(format!("HTTP {status}")));
        }
        if status.is_server_error() {
            return Err(MetNoError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(MetNoError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl LocationForecastClient for MetNoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_classic(&self, latitude: f64, longitude: f64) -> Result<String, MetNoError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.classic_url();
        let query = self.query(latitude, longitude);
        debug!(url = %url, ?query, "Fetching classic forecast");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| MetNoError::RequestFailed(e.to_string()))?;

        Self::check_status(response.status())?;

        response
            .text()
            .await
            .map_err(|e| MetNoError::ParseError(e.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        // Probe with the default office location
        self.fetch_classic(58.91, 5.72).await.is_ok()
    }
}
