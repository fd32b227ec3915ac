//! Explanation formatter
//!
//! Renders a [`Recommendation`] into the three strings the dashboard shows.
//! All wording is data in a [`PhraseBook`]; templates use `{name}`
//! placeholders that are substituted verbatim.

use std::fmt;

use domain::{Disqualification, Recommendation, ScoredCandidate};
use serde::{Deserialize, Serialize};

/// Presentation status of an explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationStatus {
    Recommended,
    IndoorsOnly,
    Fallback,
    NoData,
}

impl fmt::Display for ExplanationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recommended => "recommended",
            Self::IndoorsOnly => "indoors_only",
            Self::Fallback => "fallback",
            Self::NoData => "no_data",
        };
        f.write_str(name)
    }
}

/// Human-readable rendering of a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub status: ExplanationStatus,
    pub headline: String,
    pub detail: String,
}

/// Language of the phrase book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "nb", alias = "no")]
    Norwegian,
    #[serde(alias = "en")]
    English,
}

/// Templates and fixed phrases for one language
///
/// Placeholders: `{hour}`, `{temperature}`, `{wind}`, `{score}`,
/// `{reasons}` and `{conditions}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseBook {
    pub best_headline: &'static str,
    pub best_detail: &'static str,
    pub rain_headline: &'static str,
    pub fallback_headline: &'static str,
    pub fallback_detail: &'static str,
    pub no_data_headline: &'static str,

    pub not_sunny: &'static str,
    pub too_cold: &'static str,
    pub too_windy: &'static str,
    pub insufficient_data: &'static str,
    /// Joins reasons in the fallback detail
    pub conjunction: &'static str,

    pub freezing: &'static str,
    pub chilly: &'static str,
    pub mild: &'static str,
    pub strong_wind: &'static str,
    pub breezy: &'static str,
    pub calm: &'static str,
    pub sunny: &'static str,
    pub overcast: &'static str,

    /// Render decimals as `1,5` instead of `1.5`
    pub decimal_comma: bool,
}

impl PhraseBook {
    /// Dashboard wording
    #[must_use]
    pub const fn norwegian() -> Self {
        Self {
            best_headline: "Anbefalt kaffepause ute kl. {hour}",
            best_detail: "{temperature} °C, vind {wind} m/s (poeng {score})",
            rain_headline: "Regn hele dagen: ta kaffen inne i dag",
            fallback_headline: "Ingen god kaffepause ute i dag ({conditions})",
            fallback_detail: "Beste alternativ kl. {hour}, men {reasons}.",
            no_data_headline: "Ingen værdata tilgjengelig",
            not_sunny: "det er ikke sol",
            too_cold: "det er for kaldt",
            too_windy: "vinden er for sterk",
            insufficient_data: "mangler værdata",
            conjunction: " og ",
            freezing: "iskaldt",
            chilly: "kjølig",
            mild: "mildt",
            strong_wind: "sterk vind",
            breezy: "frisk bris",
            calm: "lite vind",
            sunny: "sol",
            overcast: "overskyet",
            decimal_comma: true,
        }
    }

    #[must_use]
    pub const fn english() -> Self {
        Self {
            best_headline: "Recommended outdoor coffee break at {hour}",
            best_detail: "{temperature} °C, wind {wind} m/s (score {score})",
            rain_headline: "Rain all day: take your coffee indoors today",
            fallback_headline: "No good outdoor coffee break today ({conditions})",
            fallback_detail: "Best option at {hour}, but {reasons}.",
            no_data_headline: "No weather data available",
            not_sunny: "it is not sunny",
            too_cold: "it is too cold",
            too_windy: "the wind is too strong",
            insufficient_data: "weather data is missing",
            conjunction: " and ",
            freezing: "freezing",
            chilly: "chilly",
            mild: "mild",
            strong_wind: "strong wind",
            breezy: "breezy",
            calm: "light wind",
            sunny: "sunny",
            overcast: "overcast",
            decimal_comma: false,
        }
    }

    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Norwegian => Self::norwegian(),
            Locale::English => Self::english(),
        }
    }

    /// Phrase for a disqualification reason
    #[must_use]
    pub const fn reason(&self, reason: Disqualification) -> &'static str {
        match reason {
            Disqualification::NotSunny => self.not_sunny,
            Disqualification::TooCold => self.too_cold,
            Disqualification::TooWindy => self.too_windy,
            Disqualification::InsufficientData => self.insufficient_data,
        }
    }

    fn temperature_band(&self, celsius: f64) -> &'static str {
        if celsius < 5.0 {
            self.freezing
        } else if celsius < 10.0 {
            self.chilly
        } else {
            self.mild
        }
    }

    fn wind_band(&self, mps: f64) -> &'static str {
        if mps > 5.0 {
            self.strong_wind
        } else if mps > 3.0 {
            self.breezy
        } else {
            self.calm
        }
    }

    const fn sky_band(&self, sunny: bool) -> &'static str {
        if sunny { self.sunny } else { self.overcast }
    }

    fn number(&self, value: f64) -> String {
        let text = format!("{value:.1}");
        if self.decimal_comma {
            text.replace('.', ",")
        } else {
            text
        }
    }

    fn conditions(&self, scored: &ScoredCandidate) -> String {
        let mut bands = Vec::with_capacity(3);
        if let Some(t) = scored.candidate.temperature_c {
            bands.push(self.temperature_band(t));
        }
        if let Some(w) = scored.candidate.wind_speed_mps {
            bands.push(self.wind_band(w));
        }
        bands.push(self.sky_band(scored.is_sunny));
        bands.join(", ")
    }

    fn reasons(&self, reasons: &[Disqualification]) -> String {
        reasons
            .iter()
            .map(|r| self.reason(*r))
            .collect::<Vec<_>>()
            .join(self.conjunction)
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::norwegian()
    }
}

/// Substitute placeholders in a template
fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}

/// Render a recommendation with the given phrase book
#[must_use]
pub fn explain(recommendation: &Recommendation, phrases: &PhraseBook) -> Explanation {
    match recommendation {
        Recommendation::Best {
            starts_at,
            temperature_c,
            wind_speed_mps,
            score,
            ..
        } => {
            let hour = starts_at.format("%H:%M").to_string();
            let temperature = phrases.number(*temperature_c);
            let wind = phrases.number(*wind_speed_mps);
            let score = phrases.number(*score);
            let values = [
                ("hour", hour.as_str()),
                ("temperature", temperature.as_str()),
                ("wind", wind.as_str()),
                ("score", score.as_str()),
            ];
            Explanation {
                status: ExplanationStatus::Recommended,
                headline: render(phrases.best_headline, &values),
                detail: render(phrases.best_detail, &values),
            }
        },
        Recommendation::RainOverride => Explanation {
            status: ExplanationStatus::IndoorsOnly,
            headline: phrases.rain_headline.to_string(),
            detail: String::new(),
        },
        Recommendation::Fallback {
            best_available,
            reasons,
        } => {
            let hour = best_available
                .candidate
                .starts_at
                .format("%H:%M")
                .to_string();
            let conditions = phrases.conditions(best_available);
            let reasons = phrases.reasons(reasons);
            let values = [
                ("hour", hour.as_str()),
                ("conditions", conditions.as_str()),
                ("reasons", reasons.as_str()),
            ];
            Explanation {
                status: ExplanationStatus::Fallback,
                headline: render(phrases.fallback_headline, &values),
                detail: render(phrases.fallback_detail, &values),
            }
        },
        Recommendation::NoData => Explanation {
            status: ExplanationStatus::NoData,
            headline: phrases.no_data_headline.to_string(),
            detail: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use domain::{HourlyCandidate, SkyCode};

    fn best() -> Recommendation {
        Recommendation::Best {
            starts_at: DateTime::parse_from_rfc3339("2025-06-02T12:00:00+02:00").unwrap(),
            hour: 12,
            temperature_c: 14.0,
            wind_speed_mps: 1.0,
            score: 17.0,
        }
    }

    fn fallback(temp: f64, wind: f64, sunny: bool, reasons: Vec<Disqualification>) -> Recommendation {
        let scored = ScoredCandidate {
            candidate: HourlyCandidate {
                starts_at: DateTime::parse_from_rfc3339("2025-06-02T13:00:00+02:00").unwrap(),
                hour: 13,
                temperature_c: Some(temp),
                wind_speed_mps: Some(wind),
                sky_code: Some(SkyCode::new(if sunny { "fair_day" } else { "cloudy" }).unwrap()),
                cloudiness_pct: None,
            },
            is_sunny: sunny,
            qualifies: false,
            reasons: reasons.clone(),
            score: Some(0.0),
        };
        Recommendation::Fallback {
            best_available: scored,
            reasons,
        }
    }

    #[test]
    fn best_names_the_hour() {
        let explanation = explain(&best(), &PhraseBook::norwegian());
        assert_eq!(explanation.status, ExplanationStatus::Recommended);
        assert_eq!(explanation.headline, "Anbefalt kaffepause ute kl. 12:00");
        assert_eq!(explanation.detail, "14,0 °C, vind 1,0 m/s (poeng 17,0)");
    }

    #[test]
    fn english_uses_decimal_point() {
        let explanation = explain(&best(), &PhraseBook::english());
        assert_eq!(explanation.headline, "Recommended outdoor coffee break at 12:00");
        assert_eq!(explanation.detail, "14.0 °C, wind 1.0 m/s (score 17.0)");
    }

    #[test]
    fn wind_has_one_decimal() {
        let rec = Recommendation::Best {
            starts_at: DateTime::parse_from_rfc3339("2025-06-02T09:00:00+02:00").unwrap(),
            hour: 9,
            temperature_c: 12.34,
            wind_speed_mps: 2.26,
            score: 12.0,
        };
        let explanation = explain(&rec, &PhraseBook::norwegian());
        assert!(explanation.headline.ends_with("kl. 09:00"));
        assert!(explanation.detail.contains("12,3 °C, vind 2,3 m/s"));
    }

    #[test]
    fn rain_is_indoors_only() {
        let explanation = explain(&Recommendation::RainOverride, &PhraseBook::default());
        assert_eq!(explanation.status, ExplanationStatus::IndoorsOnly);
        assert!(explanation.headline.contains("inne"));
        assert!(explanation.detail.is_empty());
    }

    #[test]
    fn no_data_is_neutral() {
        let explanation = explain(&Recommendation::NoData, &PhraseBook::default());
        assert_eq!(explanation.status, ExplanationStatus::NoData);
        assert_eq!(explanation.headline, "Ingen værdata tilgjengelig");
        assert!(explanation.detail.is_empty());
    }

    #[test]
    fn fallback_lists_reasons() {
        let rec = fallback(11.0, 5.0, true, vec![Disqualification::TooWindy]);
        let explanation = explain(&rec, &PhraseBook::norwegian());
        assert_eq!(explanation.status, ExplanationStatus::Fallback);
        assert_eq!(explanation.detail, "Beste alternativ kl. 13:00, men vinden er for sterk.");
        assert_eq!(
            explanation.headline,
            "Ingen god kaffepause ute i dag (mildt, frisk bris, sol)"
        );
    }

    #[test]
    fn fallback_joins_reasons_with_conjunction() {
        let rec = fallback(
            4.0,
            6.0,
            false,
            vec![
                Disqualification::NotSunny,
                Disqualification::TooCold,
                Disqualification::TooWindy,
            ],
        );
        let nb = explain(&rec, &PhraseBook::norwegian());
        assert_eq!(
            nb.detail,
            "Beste alternativ kl. 13:00, men det er ikke sol og det er for kaldt og vinden er for sterk."
        );
        assert!(nb.headline.contains("iskaldt, sterk vind, overskyet"));

        let en = explain(&rec, &PhraseBook::english());
        assert!(en.detail.contains("it is not sunny and it is too cold and the wind is too strong"));
    }

    #[test]
    fn bands_use_strict_bounds() {
        let phrases = PhraseBook::norwegian();
        assert_eq!(phrases.temperature_band(4.9), "iskaldt");
        assert_eq!(phrases.temperature_band(5.0), "kjølig");
        assert_eq!(phrases.temperature_band(10.0), "mildt");
        assert_eq!(phrases.wind_band(5.0), "frisk bris");
        assert_eq!(phrases.wind_band(5.1), "sterk vind");
        assert_eq!(phrases.wind_band(3.0), "lite vind");
    }

    #[test]
    fn locale_selects_book() {
        assert_eq!(PhraseBook::for_locale(Locale::English), PhraseBook::english());
        assert_eq!(PhraseBook::for_locale(Locale::default()), PhraseBook::norwegian());
    }

    #[test]
    fn locale_accepts_short_codes() {
        let nb: Locale = serde_json::from_str("\"nb\"").unwrap();
        let en: Locale = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(nb, Locale::Norwegian);
        assert_eq!(en, Locale::English);
    }

    #[test]
    fn disqualification_phrases_match_domain_defaults() {
        let phrases = PhraseBook::norwegian();
        for reason in [
            Disqualification::NotSunny,
            Disqualification::TooCold,
            Disqualification::TooWindy,
            Disqualification::InsufficientData,
        ] {
            assert_eq!(phrases.reason(reason), reason.phrase());
        }
    }
}
