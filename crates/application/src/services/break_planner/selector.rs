//! Recommendation selector
//!
//! Precedence, first match wins:
//!
//! 1. every complete candidate with a sky code reports precipitation
//! 2. no candidate has complete data
//! 3. the highest-scoring qualifying candidate
//! 4. the least-bad complete candidate, with its reasons

use std::cmp::Ordering;

use domain::{Recommendation, ScoredCandidate};

use super::policy::ScoringPolicy;

/// A complete candidate with its readings unwrapped
struct Ranked<'a> {
    scored: &'a ScoredCandidate,
    temperature: f64,
    wind: f64,
    score: f64,
}

impl<'a> Ranked<'a> {
    fn from_scored(scored: &'a ScoredCandidate) -> Option<Self> {
        Some(Self {
            scored,
            temperature: scored.candidate.temperature_c?,
            wind: scored.candidate.wind_speed_mps?,
            score: scored.score?,
        })
    }
}

/// Pick the outcome for a scored day
#[must_use]
pub fn select(scored: &[ScoredCandidate], policy: &ScoringPolicy) -> Recommendation {
    let complete: Vec<Ranked<'_>> = scored.iter().filter_map(Ranked::from_scored).collect();

    if is_rain_all_day(&complete, policy) {
        return Recommendation::RainOverride;
    }

    if complete.is_empty() {
        return Recommendation::NoData;
    }

    let best = complete
        .iter()
        .filter(|r| r.scored.qualifies)
        .min_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| earliest_first(a, b))
        });
    if let Some(best) = best {
        return Recommendation::Best {
            starts_at: best.scored.candidate.starts_at,
            hour: best.scored.candidate.hour,
            temperature_c: best.temperature,
            wind_speed_mps: best.wind,
            score: best.score,
        };
    }

    let least_bad = complete.iter().min_by(|a, b| {
        a.scored
            .reasons
            .len()
            .cmp(&b.scored.reasons.len())
            .then_with(|| b.temperature.total_cmp(&a.temperature))
            .then_with(|| earliest_first(a, b))
    });
    match least_bad {
        Some(r) => Recommendation::Fallback {
            best_available: r.scored.clone(),
            reasons: r.scored.reasons.clone(),
        },
        None => Recommendation::NoData,
    }
}

fn earliest_first(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    a.scored
        .candidate
        .starts_at
        .cmp(&b.scored.candidate.starts_at)
}

fn is_rain_all_day(complete: &[Ranked<'_>], policy: &ScoringPolicy) -> bool {
    let mut coded = complete
        .iter()
        .filter_map(|r| r.scored.candidate.sky_code.as_ref())
        .peekable();
    coded.peek().is_some() && coded.all(|code| policy.is_precipitation(code))
}
