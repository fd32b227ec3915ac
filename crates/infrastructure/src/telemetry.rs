//! Logging initialization
//!
//! Console logging through `tracing-subscriber`, as plain text or JSON lines.
//! Logs go to stderr so command output on stdout stays machine-readable.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging errors
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("Logging initialization failed: {0}")]
    Init(String),
}

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "warn", "application=debug,integration_metno=trace")
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Build the filter; `RUST_LOG` takes precedence when set
    ///
    /// # Errors
    ///
    /// Returns `LoggingError::InvalidFilter` if the configured directive is malformed.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.filter).map_err(|e| LoggingError::InvalidFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })
    }
}

/// Install the global subscriber
///
/// Call once, at startup.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = config.env_filter()?;

    let text_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });
    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    info!(filter = %config.filter, json = config.json, "Logging initialized");
    Ok(())
}
