//! Terminal output

use std::fmt::Write as _;

use application::{BreakAdvice, PhraseBook};
use domain::ScoredCandidate;

/// Advice as a short text block: day, headline, detail
pub fn advice(advice: &BreakAdvice) -> String {
    let mut out = String::new();
    if let Some(date) = advice.target_date {
        let _ = writeln!(out, "{date}");
    }
    let _ = writeln!(out, "{}", advice.explanation.headline);
    if !advice.explanation.detail.is_empty() {
        let _ = writeln!(out, "{}", advice.explanation.detail);
    }
    out
}

/// One row per scored hour
pub fn hours(scored: &[ScoredCandidate], phrases: &PhraseBook) -> String {
    if scored.is_empty() {
        return format!("{}\n", phrases.no_data_headline);
    }

    let mut out = format!(
        "{:<6} {:>7} {:>6} {:<20} {:<5} {:>6}  {}\n",
        "HOUR", "TEMP", "WIND", "SKY", "SUN", "SCORE", "NOTES"
    );
    for entry in scored {
        let candidate = &entry.candidate;
        let notes = if entry.qualifies {
            "ok".to_string()
        } else {
            entry
                .reasons
                .iter()
                .map(|reason| phrases.reason(*reason))
                .collect::<Vec<_>>()
                .join("; ")
        };
        let _ = writeln!(
            out,
            "{:<6} {:>7} {:>6} {:<20} {:<5} {:>6}  {}",
            candidate.starts_at.format("%H:%M"),
            optional(candidate.temperature_c),
            optional(candidate.wind_speed_mps),
            candidate.sky_code.as_ref().map_or("-", |code| code.as_str()),
            if entry.is_sunny { "yes" } else { "no" },
            optional(entry.score),
            notes,
        );
    }
    out
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}
