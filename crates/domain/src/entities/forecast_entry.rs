//! Raw forecast entry
//!
//! One `<time>` element of a forecast document: either an instantaneous
//! reading (`from == to`) or an aggregate over a window (`from < to`).

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::value_objects::SkyCode;

/// A single forecast entry as received from the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Interval start, with the offset stated by the source
    pub from: DateTime<FixedOffset>,
    /// Interval end, with the offset stated by the source
    pub to: DateTime<FixedOffset>,
    /// Air temperature in °C
    #[serde(default)]
    pub temperature_c: Option<f64>,
    /// Wind speed in m/s
    #[serde(default)]
    pub wind_speed_mps: Option<f64>,
    /// Sky-condition symbol
    #[serde(default)]
    pub sky_code: Option<SkyCode>,
    /// Cloud cover in percent
    #[serde(default)]
    pub cloudiness_pct: Option<f64>,
}

impl ForecastEntry {
    /// Create an instantaneous entry with no readings
    #[must_use]
    pub const fn instant(at: DateTime<FixedOffset>) -> Self {
        Self::period(at, at)
    }

    /// Create a window entry with no readings
    #[must_use]
    pub const fn period(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Self {
        Self {
            from,
            to,
            temperature_c: None,
            wind_speed_mps: None,
            sky_code: None,
            cloudiness_pct: None,
        }
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature_c = Some(celsius);
        self
    }

    /// Set the wind speed
    #[must_use]
    pub const fn with_wind_speed(mut self, mps: f64) -> Self {
        self.wind_speed_mps = Some(mps);
        self
    }

    /// Set the sky code
    #[must_use]
    pub fn with_sky_code(mut self, code: SkyCode) -> Self {
        self.sky_code = Some(code);
        self
    }

    /// Set the cloud cover
    #[must_use]
    pub const fn with_cloudiness(mut self, pct: f64) -> Self {
        self.cloudiness_pct = Some(pct);
        self
    }

    /// Whether this entry is an instantaneous reading
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.from == self.to
    }

    /// Length of the covered interval
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.to - self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn instant_has_zero_duration() {
        let entry = ForecastEntry::instant(at("2025-06-02T10:00:00Z"));
        assert!(entry.is_instant());
        assert_eq!(entry.duration(), Duration::zero());
    }

    #[test]
    fn period_is_not_instant() {
        let entry = ForecastEntry::period(at("2025-06-02T09:00:00Z"), at("2025-06-02T10:00:00Z"));
        assert!(!entry.is_instant());
        assert_eq!(entry.duration(), Duration::hours(1));
    }

    #[test]
    fn same_instant_in_different_offsets_is_instant() {
        let entry = ForecastEntry::period(
            at("2025-06-02T10:00:00Z"),
            at("2025-06-02T12:00:00+02:00"),
        );
        assert!(entry.is_instant());
    }

    #[test]
    fn builders_set_fields() {
        let entry = ForecastEntry::instant(at("2025-06-02T10:00:00Z"))
            .with_temperature(14.0)
            .with_wind_speed(1.5)
            .with_cloudiness(20.0)
            .with_sky_code(SkyCode::new("fair_day").unwrap());
        assert_eq!(entry.temperature_c, Some(14.0));
        assert_eq!(entry.wind_speed_mps, Some(1.5));
        assert_eq!(entry.cloudiness_pct, Some(20.0));
        assert_eq!(entry.sky_code.unwrap().as_str(), "fair_day");
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let json = r#"{"from":"2025-06-02T10:00:00Z","to":"2025-06-02T10:00:00Z"}"#;
        let entry: ForecastEntry = serde_json::from_str(json).unwrap();
        assert!(entry.temperature_c.is_none());
        assert!(entry.sky_code.is_none());
    }
}
