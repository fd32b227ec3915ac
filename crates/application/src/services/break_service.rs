//! Break advice service
//!
//! Fetches a forecast through the [`ForecastPort`] and runs it through the
//! break planner. Always produces an answer: a failed fetch degrades to
//! `NoData`.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use domain::{ForecastEntry, ForecastSource, Recommendation, ScoredCandidate};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::break_planner::{
    Explanation, NormalizeOptions, PhraseBook, ScoringPolicy, evaluate_hours, explain,
    resolve_target_date, select,
};
use crate::ports::ForecastPort;

/// One computed piece of advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakAdvice {
    /// When the advice was computed
    pub generated_at: DateTime<Utc>,
    /// Day the advice is for; `None` when the forecast was empty
    pub target_date: Option<NaiveDate>,
    pub recommendation: Recommendation,
    pub explanation: Explanation,
}

/// Service producing break advice from a forecast source
pub struct BreakService {
    forecast: Arc<dyn ForecastPort>,
    policy: ScoringPolicy,
    phrases: PhraseBook,
    zone: Option<Tz>,
}

impl fmt::Debug for BreakService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakService")
            .field("policy", &self.policy)
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}

impl BreakService {
    /// Create a new break service
    #[must_use]
    pub fn new(
        forecast: Arc<dyn ForecastPort>,
        policy: ScoringPolicy,
        phrases: PhraseBook,
        zone: Option<Tz>,
    ) -> Self {
        Self {
            forecast,
            policy,
            phrases,
            zone,
        }
    }

    /// Compute advice for the given source
    #[instrument(skip(self, source), fields(source = %source))]
    pub async fn advise(&self, source: &ForecastSource, target_date: Option<NaiveDate>) -> BreakAdvice {
        let entries = self.load_entries(source).await;
        let options = self.options(target_date);

        let scored = evaluate_hours(&entries, &options, &self.policy);
        let recommendation = select(&scored, &self.policy);
        let explanation = explain(&recommendation, &self.phrases);

        info!(
            outcome = %recommendation.kind(),
            candidates = scored.len(),
            starts_at = ?recommendation.recommended_start(),
            headline = %explanation.headline,
            "Break advice computed"
        );

        BreakAdvice {
            generated_at: Utc::now(),
            target_date: resolve_target_date(&entries, &options),
            recommendation,
            explanation,
        }
    }

    /// Scored hours of the target day, for inspection
    #[instrument(skip(self, source), fields(source = %source))]
    pub async fn hours(
        &self,
        source: &ForecastSource,
        target_date: Option<NaiveDate>,
    ) -> Vec<ScoredCandidate> {
        let entries = self.load_entries(source).await;
        evaluate_hours(&entries, &self.options(target_date), &self.policy)
    }

    /// Check if the forecast backend is reachable
    pub async fn is_available(&self) -> bool {
        self.forecast.is_available().await
    }

    const fn options(&self, target_date: Option<NaiveDate>) -> NormalizeOptions {
        NormalizeOptions {
            target_date,
            zone: self.zone,
        }
    }

    async fn load_entries(&self, source: &ForecastSource) -> Vec<ForecastEntry> {
        match self.forecast.fetch_entries(source).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Forecast fetch failed, advising without data");
                Vec::new()
            },
        }
    }
}
