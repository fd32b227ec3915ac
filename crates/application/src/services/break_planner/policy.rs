//! Scoring policy
//!
//! Every tunable of the break planner: business window, sunny allow-list,
//! precipitation tokens, adaptive thresholds and score weights. Defaults
//! reproduce the dashboard's current rules; any of them can be overridden
//! from configuration.

use domain::{BusinessWindow, DomainError, SkyCode};
use serde::{Deserialize, Serialize};

/// Adaptive suitability thresholds, relaxed when the sun is out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    /// Minimum temperature (°C) for a sunny hour
    #[serde(default = "default_sunny_min_temperature")]
    pub sunny_min_temperature_c: f64,

    /// Minimum temperature (°C) for an overcast hour
    #[serde(default = "default_overcast_min_temperature")]
    pub overcast_min_temperature_c: f64,

    /// Maximum wind (m/s) for a sunny hour
    #[serde(default = "default_sunny_max_wind")]
    pub sunny_max_wind_mps: f64,

    /// Maximum wind (m/s) for an overcast hour
    #[serde(default = "default_overcast_max_wind")]
    pub overcast_max_wind_mps: f64,
}

const fn default_sunny_min_temperature() -> f64 {
    8.0
}

const fn default_overcast_min_temperature() -> f64 {
    10.0
}

const fn default_sunny_max_wind() -> f64 {
    4.5
}

const fn default_overcast_max_wind() -> f64 {
    3.5
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            sunny_min_temperature_c: default_sunny_min_temperature(),
            overcast_min_temperature_c: default_overcast_min_temperature(),
            sunny_max_wind_mps: default_sunny_max_wind(),
            overcast_max_wind_mps: default_overcast_max_wind(),
        }
    }
}

impl ThresholdTable {
    /// Lowest acceptable temperature
    #[must_use]
    pub const fn min_temperature(&self, sunny: bool) -> f64 {
        if sunny {
            self.sunny_min_temperature_c
        } else {
            self.overcast_min_temperature_c
        }
    }

    /// Highest acceptable wind speed
    #[must_use]
    pub const fn max_wind(&self, sunny: bool) -> f64 {
        if sunny {
            self.sunny_max_wind_mps
        } else {
            self.overcast_max_wind_mps
        }
    }
}

/// Linear desirability weights
///
/// `score = temperature * temp + sun_bonus * sunny - wind_penalty * wind`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Points per °C
    #[serde(default = "default_temperature_weight")]
    pub temperature: f64,

    /// Flat bonus for a sunny hour
    #[serde(default = "default_sun_bonus")]
    pub sun_bonus: f64,

    /// Points subtracted per m/s of wind
    #[serde(default = "default_wind_penalty")]
    pub wind_penalty: f64,
}

const fn default_temperature_weight() -> f64 {
    1.0
}

const fn default_sun_bonus() -> f64 {
    5.0
}

const fn default_wind_penalty() -> f64 {
    2.0
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            temperature: default_temperature_weight(),
            sun_bonus: default_sun_bonus(),
            wind_penalty: default_wind_penalty(),
        }
    }
}

impl ScoreWeights {
    /// Desirability of an hour with the given readings
    #[must_use]
    pub fn score(&self, temperature_c: f64, wind_speed_mps: f64, sunny: bool) -> f64 {
        let bonus = if sunny { self.sun_bonus } else { 0.0 };
        self.wind_penalty
            .mul_add(-wind_speed_mps, self.temperature.mul_add(temperature_c, bonus))
    }
}

/// Complete rule set for the break planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Hours eligible for a break
    #[serde(default)]
    pub window: BusinessWindow,

    /// Sky-code prefixes that count as sunny
    #[serde(default = "default_sunny_codes")]
    pub sunny_codes: Vec<String>,

    /// Substrings that mark a sky code as precipitation
    #[serde(default = "default_precipitation_tokens")]
    pub precipitation_tokens: Vec<String>,

    /// Adaptive thresholds
    #[serde(default)]
    pub thresholds: ThresholdTable,

    /// Score weights
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Cloud cover above which an hour is never sunny, whatever its code
    #[serde(default)]
    pub cloudiness_ceiling_pct: Option<f64>,
}

fn default_sunny_codes() -> Vec<String> {
    ["clearsky_day", "fair_day", "partlycloudy_day"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_precipitation_tokens() -> Vec<String> {
    ["rain", "sleet", "snow"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            window: BusinessWindow::default(),
            sunny_codes: default_sunny_codes(),
            precipitation_tokens: default_precipitation_tokens(),
            thresholds: ThresholdTable::default(),
            weights: ScoreWeights::default(),
            cloudiness_ceiling_pct: None,
        }
    }
}

impl ScoringPolicy {
    /// Check that the rule set can produce meaningful results
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for empty token lists,
    /// blank tokens or non-finite numbers.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.sunny_codes.is_empty() {
            return Err(DomainError::ValidationError(
                "sunny_codes must not be empty".to_string(),
            ));
        }
        if self.precipitation_tokens.is_empty() {
            return Err(DomainError::ValidationError(
                "precipitation_tokens must not be empty".to_string(),
            ));
        }
        if self
            .sunny_codes
            .iter()
            .chain(&self.precipitation_tokens)
            .any(|t| t.trim().is_empty())
        {
            return Err(DomainError::ValidationError(
                "sky tokens must not be blank".to_string(),
            ));
        }

        let numbers = [
            ("thresholds.sunny_min_temperature_c", self.thresholds.sunny_min_temperature_c),
            ("thresholds.overcast_min_temperature_c", self.thresholds.overcast_min_temperature_c),
            ("thresholds.sunny_max_wind_mps", self.thresholds.sunny_max_wind_mps),
            ("thresholds.overcast_max_wind_mps", self.thresholds.overcast_max_wind_mps),
            ("weights.temperature", self.weights.temperature),
            ("weights.sun_bonus", self.weights.sun_bonus),
            ("weights.wind_penalty", self.weights.wind_penalty),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DomainError::ValidationError(format!(
                "{name} must be a finite number"
            )));
        }

        if let Some(ceiling) = self.cloudiness_ceiling_pct {
            if !(0.0..=100.0).contains(&ceiling) {
                return Err(DomainError::ValidationError(format!(
                    "cloudiness_ceiling_pct must be 0-100, got {ceiling}"
                )));
            }
        }
        Ok(())
    }

    /// Whether an hour counts as sunny
    ///
    /// Requires an allow-listed code; the cloudiness ceiling, when set,
    /// can only take sunniness away.
    #[must_use]
    pub fn is_sunny(&self, sky_code: Option<&SkyCode>, cloudiness_pct: Option<f64>) -> bool {
        let Some(code) = sky_code else {
            return false;
        };
        if !code.starts_with_any(&self.sunny_codes) {
            return false;
        }
        match (self.cloudiness_ceiling_pct, cloudiness_pct) {
            (Some(ceiling), Some(cover)) => cover <= ceiling,
            _ => true,
        }
    }

    /// Whether a sky code reports rain, sleet or snow
    #[must_use]
    pub fn is_precipitation(&self, sky_code: &SkyCode) -> bool {
        sky_code.contains_any(&self.precipitation_tokens)
    }
}
