//! Command-line arguments

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use domain::{ForecastSource, GeoLocation};
use infrastructure::AppConfig;

/// KontorTemp CLI
#[derive(Debug, Parser)]
#[command(name = "kontortemp-cli")]
#[command(author, version, about = "Outdoor coffee break advice from the MET Norway forecast", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./kontortemp.toml when present)
    #[arg(short, long, global = true, env = "KONTORTEMP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recommend the best outdoor break hour
    ///
    /// Example: kontortemp-cli recommend --file forecast.xml --date 2025-06-02
    Recommend {
        #[command(flatten)]
        forecast: ForecastArgs,

        /// Print the full advice as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every scored hour of the day
    Hours {
        #[command(flatten)]
        forecast: ForecastArgs,

        /// Print the scored hours as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recompute the advice on a fixed interval until interrupted
    Watch {
        #[command(flatten)]
        forecast: ForecastArgs,

        /// Minutes between refreshes, at most one day
        #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..=1440))]
        interval_minutes: u64,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Where the forecast comes from and which day to plan
#[derive(Debug, Clone, Default, Args)]
pub struct ForecastArgs {
    /// Read a saved Locationforecast classic document instead of fetching
    #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
    pub file: Option<PathBuf>,

    /// Day to plan (YYYY-MM-DD); defaults to the first forecast day
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Latitude override
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude override
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

impl ForecastArgs {
    /// Resolve the forecast source against the configured location
    pub fn source(&self, config: &AppConfig) -> anyhow::Result<ForecastSource> {
        if let Some(path) = &self.file {
            return Ok(ForecastSource::snapshot(path.clone()));
        }
        let location = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon)
                .with_context(|| format!("--lat {lat} --lon {lon}"))?,
            _ => config.location.geo_location().context("configured location")?,
        };
        Ok(ForecastSource::live(location))
    }
}

/// Determine log filter level from verbosity count
///
/// Zero defers to the configured filter.
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
