//! Break planner configuration

use application::services::{Locale, PhraseBook, ScoringPolicy};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Zone of the default location; met.no always publishes UTC timestamps
const DEFAULT_TIMEZONE: &str = "Europe/Oslo";

fn default_timezone() -> Option<String> {
    Some(DEFAULT_TIMEZONE.to_string())
}

/// Planner settings: rules, wording and time zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Language of the explanation
    #[serde(default)]
    pub locale: Locale,

    /// IANA time zone for wall-clock hours (e.g., "Europe/Oslo")
    ///
    /// Defaults to Europe/Oslo. Unset means each forecast timestamp's own
    /// offset is used, which is UTC for live met.no data.
    #[serde(default = "default_timezone")]
    pub timezone: Option<String>,

    /// Scoring rules, including the business window
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            timezone: default_timezone(),
            scoring: ScoringPolicy::default(),
        }
    }
}

impl PlannerConfig {
    /// Parsed time zone
    ///
    /// # Errors
    ///
    /// Returns the offending name if it is not a known IANA zone.
    pub fn zone(&self) -> Result<Option<Tz>, String> {
        self.timezone
            .as_deref()
            .map(|name| name.parse::<Tz>().map_err(|_| name.to_string()))
            .transpose()
    }

    /// Phrase book for the configured locale
    #[must_use]
    pub const fn phrases(&self) -> PhraseBook {
        PhraseBook::for_locale(self.locale)
    }
}
