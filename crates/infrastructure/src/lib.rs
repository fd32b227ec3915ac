//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application's forecast port on top of the MET Norway
//! client, and provides configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, LocationConfig, PlannerConfig};
pub use telemetry::{LoggingConfig, LoggingError, init_logging};
