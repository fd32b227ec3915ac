//! Application configuration
//!
//! Layered the usual way: built-in defaults, then an optional TOML file,
//! then `KONTORTEMP_` environment variables. Nested keys use a double
//! underscore, e.g. `KONTORTEMP_PLANNER__SCORING__WINDOW__START_HOUR=10`.
//!
//! - `location`: the office coordinates
//! - `planner`: scoring rules, locale, time zone

mod location;
mod planner;

use std::{collections::HashMap, path::Path};

use integration_metno::MetNoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::telemetry::LoggingConfig;

pub use location::LocationConfig;
pub use planner::PlannerConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KONTORTEMP";

/// Default config file stem, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "kontortemp";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but make no sense together
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Effective configuration could not be rendered
    #[error("Failed to render configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Office location
    #[serde(default)]
    pub location: LocationConfig,

    /// Locationforecast client settings
    #[serde(default)]
    pub metno: MetNoConfig,

    /// Break planner settings
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// An explicit `path` must exist; otherwise `kontortemp.toml` in the
    /// working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is unreadable or the result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map instead of the process environment
    fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        debug!(
            latitude = app.location.latitude,
            longitude = app.location.longitude,
            locale = ?app.planner.locale,
            timezone = ?app.planner.timezone,
            "Configuration loaded"
        );
        Ok(app)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location
            .geo_location()
            .map_err(|e| ConfigError::Invalid(format!("location: {e}")))?;
        self.planner
            .scoring
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("planner.scoring: {e}")))?;
        self.planner
            .zone()
            .map_err(|name| ConfigError::Invalid(format!("planner.timezone: unknown zone {name:?}")))?;

        if self.metno.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "metno.user_agent: must identify the application".to_string(),
            ));
        }
        if self.metno.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "metno.timeout_secs: must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if a value has no TOML form.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
