//! Break candidates
//!
//! An `HourlyCandidate` is one hour of the target day under consideration;
//! a `ScoredCandidate` adds the suitability verdict for that hour.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::SkyCode;

/// One hour of the target day, normalized from the raw forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyCandidate {
    /// Start of the hour (the key of the candidate)
    pub starts_at: DateTime<FixedOffset>,
    /// Wall-clock hour of `starts_at`
    pub hour: u32,
    /// Air temperature in °C
    pub temperature_c: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed_mps: Option<f64>,
    /// Sky-condition symbol, possibly back-filled from a window entry
    pub sky_code: Option<SkyCode>,
    /// Cloud cover in percent
    pub cloudiness_pct: Option<f64>,
}

impl HourlyCandidate {
    /// Whether both temperature and wind are known
    #[must_use]
    pub const fn has_complete_data(&self) -> bool {
        self.temperature_c.is_some() && self.wind_speed_mps.is_some()
    }
}

/// Why an hour does not qualify for an outdoor break
///
/// Variants are listed in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disqualification {
    /// Sky is not clear, fair or partly cloudy
    NotSunny,
    /// Temperature below the minimum for the given sky
    TooCold,
    /// Wind above the maximum for the given sky
    TooWindy,
    /// Temperature or wind is missing
    InsufficientData,
}

impl Disqualification {
    /// Default (Norwegian) phrasing, as shown on the dashboard
    #[must_use]
    pub const fn phrase(&self) -> &'static str {
        match self {
            Self::NotSunny => "det er ikke sol",
            Self::TooCold => "det er for kaldt",
            Self::TooWindy => "vinden er for sterk",
            Self::InsufficientData => "mangler værdata",
        }
    }
}

impl fmt::Display for Disqualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// A candidate together with its suitability verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The evaluated hour
    pub candidate: HourlyCandidate,
    /// Whether the sky code counts as sunny
    pub is_sunny: bool,
    /// Whether every threshold is met
    pub qualifies: bool,
    /// Failed conditions, in reporting order
    pub reasons: Vec<Disqualification>,
    /// Desirability; `None` when temperature or wind is missing
    pub score: Option<f64>,
}

impl ScoredCandidate {
    /// Whether the underlying candidate has temperature and wind
    #[must_use]
    pub const fn has_complete_data(&self) -> bool {
        self.candidate.has_complete_data()
    }

    /// Reasons rendered with the default phrasing
    #[must_use]
    pub fn reason_phrases(&self) -> Vec<&'static str> {
        self.reasons.iter().map(Disqualification::phrase).collect()
    }
}
