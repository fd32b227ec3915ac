//! MET Norway weather integration
//!
//! Client for the Locationforecast 2.0 API (<https://api.met.no>).
//! Fetches the "classic" XML product and turns it into raw forecast entries.
//! No API key is needed, but every request must identify itself with a
//! descriptive `User-Agent`.

mod classic;
pub mod client;

pub use classic::parse_classic;
pub use client::{LocationForecastClient, MetNoClient, MetNoConfig, MetNoError};
