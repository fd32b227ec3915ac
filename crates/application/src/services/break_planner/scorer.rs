//! Suitability scorer

use domain::{Disqualification, HourlyCandidate, ScoredCandidate};

use super::policy::ScoringPolicy;

/// Judge a single hour against the policy
///
/// Incomplete candidates never qualify and carry no score. Complete ones are
/// always scored, qualifying or not, so the selector can rank fallbacks.
#[must_use]
pub fn score_candidate(candidate: &HourlyCandidate, policy: &ScoringPolicy) -> ScoredCandidate {
    let is_sunny = policy.is_sunny(candidate.sky_code.as_ref(), candidate.cloudiness_pct);

    let (Some(temperature), Some(wind)) = (candidate.temperature_c, candidate.wind_speed_mps)
    else {
        return ScoredCandidate {
            candidate: candidate.clone(),
            is_sunny,
            qualifies: false,
            reasons: vec![Disqualification::InsufficientData],
            score: None,
        };
    };

    let mut reasons = Vec::new();
    if !is_sunny {
        reasons.push(Disqualification::NotSunny);
    }
    if temperature < policy.thresholds.min_temperature(is_sunny) {
        reasons.push(Disqualification::TooCold);
    }
    if wind > policy.thresholds.max_wind(is_sunny) {
        reasons.push(Disqualification::TooWindy);
    }

    ScoredCandidate {
        candidate: candidate.clone(),
        is_sunny,
        qualifies: reasons.is_empty(),
        reasons,
        score: Some(policy.weights.score(temperature, wind, is_sunny)),
    }
}

/// Score every candidate, preserving order
#[must_use]
pub fn score_all(candidates: &[HourlyCandidate], policy: &ScoringPolicy) -> Vec<ScoredCandidate> {
    candidates
        .iter()
        .map(|c| score_candidate(c, policy))
        .collect()
}
