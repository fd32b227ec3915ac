//! Break planner
//!
//! The recommendation pipeline, leaf-first:
//! [`normalizer`] builds per-hour candidates, [`scorer`] judges each hour,
//! [`selector`] picks the outcome and [`explanation`] renders it.
//! Every stage is a pure function over owned values.

pub mod explanation;
pub mod normalizer;
pub mod policy;
pub mod scorer;
pub mod selector;

use domain::{ForecastEntry, Recommendation, ScoredCandidate};

pub use explanation::{Explanation, ExplanationStatus, Locale, PhraseBook, explain};
pub use normalizer::{NormalizeOptions, normalize, resolve_target_date};
pub use policy::{ScoreWeights, ScoringPolicy, ThresholdTable};
pub use scorer::{score_all, score_candidate};
pub use selector::select;

/// Scored candidates for the target day, in hour order
#[must_use]
pub fn evaluate_hours(
    entries: &[ForecastEntry],
    options: &NormalizeOptions,
    policy: &ScoringPolicy,
) -> Vec<ScoredCandidate> {
    let candidates = normalize(entries, options, policy.window);
    score_all(&candidates, policy)
}

/// Run the whole pipeline: normalize, score, select
#[must_use]
pub fn plan_break(
    entries: &[ForecastEntry],
    options: &NormalizeOptions,
    policy: &ScoringPolicy,
) -> Recommendation {
    select(&evaluate_hours(entries, options, policy), policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use domain::{OutcomeKind, SkyCode};

    fn entry(ts: &str, temp: f64, wind: f64, sky: &str) -> ForecastEntry {
        ForecastEntry::instant(DateTime::parse_from_rfc3339(ts).unwrap())
            .with_temperature(temp)
            .with_wind_speed(wind)
            .with_sky_code(SkyCode::new(sky).unwrap())
    }

    #[test]
    fn evaluate_hours_scores_each_in_window_hour() {
        let entries = vec![
            entry("2025-06-02T08:00:00+02:00", 14.0, 1.0, "clearsky_day"),
            entry("2025-06-02T10:00:00+02:00", 14.0, 1.0, "clearsky_day"),
            entry("2025-06-02T11:00:00+02:00", 9.0, 1.0, "cloudy"),
        ];
        let hours = evaluate_hours(&entries, &NormalizeOptions::default(), &ScoringPolicy::default());
        assert_eq!(hours.len(), 2);
        assert!(hours[0].qualifies);
        assert!(!hours[1].qualifies);
    }

    #[test]
    fn plan_break_uses_policy_window() {
        let entries = vec![entry("2025-06-02T17:00:00+02:00", 14.0, 1.0, "clearsky_day")];
        let default = plan_break(&entries, &NormalizeOptions::default(), &ScoringPolicy::default());
        assert_eq!(default.kind(), OutcomeKind::NoData);

        let late = ScoringPolicy {
            window: domain::BusinessWindow::new(9, 18).unwrap(),
            ..ScoringPolicy::default()
        };
        let rec = plan_break(&entries, &NormalizeOptions::default(), &late);
        assert_eq!(rec.kind(), OutcomeKind::Best);
    }

    #[test]
    fn plan_break_explains_end_to_end() {
        let entries = vec![entry("2025-06-02T12:00:00+02:00", 14.0, 1.0, "clearsky_day")];
        let rec = plan_break(&entries, &NormalizeOptions::default(), &ScoringPolicy::default());
        let text = explain(&rec, &PhraseBook::default());
        assert_eq!(text.headline, "Anbefalt kaffepause ute kl. 12:00");
    }
}
