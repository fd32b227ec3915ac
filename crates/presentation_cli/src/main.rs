//! KontorTemp CLI
//!
//! Command-line interface for break advice and configuration inspection.

#![allow(clippy::print_stdout)]

mod cli;
mod render;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::BreakService;
use clap::Parser;
use infrastructure::{AppConfig, LoggingConfig, MetNoForecastAdapter, init_logging};
use tracing::{info, warn};

use crate::cli::{Cli, Commands, ForecastArgs, log_filter_from_verbosity};

fn build_service(config: &AppConfig) -> anyhow::Result<BreakService> {
    let adapter = MetNoForecastAdapter::with_config(config.metno.clone())
        .context("Failed to create forecast client")?;
    let zone = config
        .planner
        .zone()
        .map_err(|name| anyhow::anyhow!("Unknown time zone {name:?}"))?;

    Ok(BreakService::new(
        Arc::new(adapter),
        config.planner.scoring.clone(),
        config.planner.phrases(),
        zone,
    ))
}

async fn recommend(
    service: &BreakService,
    config: &AppConfig,
    forecast: &ForecastArgs,
    json: bool,
) -> anyhow::Result<()> {
    let source = forecast.source(config)?;
    let advice = service.advise(&source, forecast.date).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        print!("{}", render::advice(&advice));
    }
    Ok(())
}

async fn hours(
    service: &BreakService,
    config: &AppConfig,
    forecast: &ForecastArgs,
    json: bool,
) -> anyhow::Result<()> {
    let source = forecast.source(config)?;
    let scored = service.hours(&source, forecast.date).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        print!("{}", render::hours(&scored, &config.planner.phrases()));
    }
    Ok(())
}

async fn watch(
    service: &BreakService,
    config: &AppConfig,
    forecast: &ForecastArgs,
    interval_minutes: u64,
) -> anyhow::Result<()> {
    let source = forecast.source(config)?;
    let period = Duration::from_secs(interval_minutes.saturating_mul(60));
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    info!(source = %source, interval_minutes, "Watching forecast");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let advice = service.advise(&source, forecast.date).await;
                println!("[{}]", advice.generated_at.format("%Y-%m-%d %H:%M:%SZ"));
                print!("{}", render::advice(&advice));
                println!();
            },
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!(error = %e, "Failed to listen for interrupt");
                }
                info!("Stopping watch");
                return Ok(());
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Set up logging; -v overrides the configured filter
    let logging = LoggingConfig {
        filter: log_filter_from_verbosity(cli.verbose)
            .map_or_else(|| config.logging.filter.clone(), str::to_string),
        ..config.logging.clone()
    };
    init_logging(&logging)?;

    match cli.command {
        Commands::Recommend { forecast, json } => {
            let service = build_service(&config)?;
            recommend(&service, &config, &forecast, json).await?;
        },

        Commands::Hours { forecast, json } => {
            let service = build_service(&config)?;
            hours(&service, &config, &forecast, json).await?;
        },

        Commands::Watch {
            forecast,
            interval_minutes,
        } => {
            let service = build_service(&config)?;
            watch(&service, &config, &forecast, interval_minutes).await?;
        },

        Commands::Config => {
            print!("{}", config.to_toml()?);
        },
    }

    Ok(())
}
