//! Break recommendation outcome

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::candidate::{Disqualification, ScoredCandidate};

/// The decision handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// A qualifying hour with the highest score
    Best {
        starts_at: DateTime<FixedOffset>,
        hour: u32,
        temperature_c: f64,
        wind_speed_mps: f64,
        score: f64,
    },
    /// Every considered hour reports precipitation
    RainOverride,
    /// No hour qualifies; the least-bad one and why it fails
    Fallback {
        best_available: ScoredCandidate,
        reasons: Vec<Disqualification>,
    },
    /// No hour had both temperature and wind
    NoData,
}

/// Discriminant of a [`Recommendation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Best,
    RainOverride,
    Fallback,
    NoData,
}

impl Recommendation {
    /// Which outcome this is
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Best { .. } => OutcomeKind::Best,
            Self::RainOverride => OutcomeKind::RainOverride,
            Self::Fallback { .. } => OutcomeKind::Fallback,
            Self::NoData => OutcomeKind::NoData,
        }
    }

    /// Recommended start, if the outcome is positive
    #[must_use]
    pub const fn recommended_start(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Best { starts_at, .. } => Some(*starts_at),
            _ => None,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Best => "best",
            Self::RainOverride => "rain_override",
            Self::Fallback => "fallback",
            Self::NoData => "no_data",
        };
        f.write_str(name)
    }
}
