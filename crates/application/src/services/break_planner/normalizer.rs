//! Forecast normalizer
//!
//! Turns the irregular, multi-resolution forecast series into one record per
//! hour of the target day. Zero-length entries carry the readings; windows
//! only contribute sky codes through the backfill pass.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use domain::{BusinessWindow, ForecastEntry, HourlyCandidate, SkyCode};
use tracing::debug;

/// How to read the forecast's timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Day to plan for; defaults to the day of the earliest reading
    pub target_date: Option<NaiveDate>,
    /// Zone for wall-clock hours; defaults to each entry's stated offset
    pub zone: Option<Tz>,
}

impl NormalizeOptions {
    /// Plan for a specific day
    #[must_use]
    pub const fn for_date(date: NaiveDate) -> Self {
        Self {
            target_date: Some(date),
            zone: None,
        }
    }

    /// Read wall-clock hours in the given zone
    #[must_use]
    pub const fn with_zone(mut self, zone: Tz) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Local view of a timestamp
    fn local(&self, at: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self.zone {
            Some(tz) => at.with_timezone(&tz).fixed_offset(),
            None => at,
        }
    }
}

/// Day the forecast is anchored to
///
/// The explicit target date if one is set, otherwise the local date of the
/// earliest zero-length entry. `None` when there is nothing to anchor on.
#[must_use]
pub fn resolve_target_date(
    entries: &[ForecastEntry],
    options: &NormalizeOptions,
) -> Option<NaiveDate> {
    options.target_date.or_else(|| {
        entries
            .iter()
            .filter(|e| e.is_instant())
            .map(|e| e.from)
            .min()
            .map(|earliest| options.local(earliest).date_naive())
    })
}

/// Build the per-hour candidates for the target day
///
/// Output is ordered by start timestamp and does not depend on the order of
/// `entries`.
#[must_use]
pub fn normalize(
    entries: &[ForecastEntry],
    options: &NormalizeOptions,
    window: BusinessWindow,
) -> Vec<HourlyCandidate> {
    let Some(target_date) = resolve_target_date(entries, options) else {
        debug!("No zero-length entries, nothing to normalize");
        return Vec::new();
    };

    let mut sorted: Vec<&ForecastEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| canonical_order(a, b));

    let mut candidates: BTreeMap<DateTime<Utc>, HourlyCandidate> = BTreeMap::new();
    let mut sky_index: BTreeMap<DateTime<Utc>, (Duration, SkyCode)> = BTreeMap::new();

    for entry in &sorted {
        let duration = entry.duration();
        if duration < Duration::zero() {
            debug!(from = %entry.from, to = %entry.to, "Skipping entry that ends before it starts");
            continue;
        }

        if let Some(code) = &entry.sky_code {
            let key = entry.to.to_utc();
            let replace = sky_index
                .get(&key)
                .is_none_or(|(shortest, _)| duration < *shortest);
            if replace {
                sky_index.insert(key, (duration, code.clone()));
            }
        }

        if !entry.is_instant() {
            continue;
        }

        let local = options.local(entry.from);
        if local.date_naive() != target_date || !window.contains(local.hour()) {
            continue;
        }

        candidates
            .entry(entry.from.to_utc())
            .and_modify(|existing| merge_into(existing, entry))
            .or_insert_with(|| HourlyCandidate {
                starts_at: local,
                hour: local.hour(),
                temperature_c: finite(entry.temperature_c),
                wind_speed_mps: finite(entry.wind_speed_mps),
                sky_code: entry.sky_code.clone(),
                cloudiness_pct: finite(entry.cloudiness_pct),
            });
    }

    let mut backfilled = 0usize;
    for (key, candidate) in &mut candidates {
        if candidate.sky_code.is_none() {
            if let Some((_, code)) = sky_index.get(key) {
                candidate.sky_code = Some(code.clone());
                backfilled += 1;
            }
        }
    }

    let candidates: Vec<HourlyCandidate> = candidates.into_values().collect();
    debug!(
        %target_date,
        %window,
        entries = entries.len(),
        candidates = candidates.len(),
        backfilled,
        "Normalized forecast"
    );
    candidates
}

/// First present value wins
fn merge_into(existing: &mut HourlyCandidate, entry: &ForecastEntry) {
    if existing.temperature_c.is_none() {
        existing.temperature_c = finite(entry.temperature_c);
    }
    if existing.wind_speed_mps.is_none() {
        existing.wind_speed_mps = finite(entry.wind_speed_mps);
    }
    if existing.sky_code.is_none() {
        existing.sky_code.clone_from(&entry.sky_code);
    }
    if existing.cloudiness_pct.is_none() {
        existing.cloudiness_pct = finite(entry.cloudiness_pct);
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Total order over entries: start, end, stated offset, then readings
fn canonical_order(a: &ForecastEntry, b: &ForecastEntry) -> Ordering {
    a.from
        .cmp(&b.from)
        .then_with(|| a.to.cmp(&b.to))
        .then_with(|| {
            a.from
                .offset()
                .local_minus_utc()
                .cmp(&b.from.offset().local_minus_utc())
        })
        .then_with(|| compare_reading(a.temperature_c, b.temperature_c))
        .then_with(|| compare_reading(a.wind_speed_mps, b.wind_speed_mps))
        .then_with(|| compare_reading(a.cloudiness_pct, b.cloudiness_pct))
        .then_with(|| match (&a.sky_code, &b.sky_code) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

// Present and finite readings sort first.
fn compare_reading(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (finite(a), finite(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
