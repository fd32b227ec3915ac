//! Locationforecast "classic" XML parser
//!
//! The classic product is a flat list of `<time from=".." to="..">`
//! elements, each wrapping one `<location>` with reading elements:
//!
//! ```xml
//! <time datatype="forecast" from="2025-06-02T10:00:00Z" to="2025-06-02T10:00:00Z">
//!   <location altitude="30" latitude="58.9100" longitude="5.7200">
//!     <temperature id="TTT" unit="celsius" value="14.2"/>
//!     <windSpeed id="ff" mps="3.4" beaufort="3" name="Lett bris"/>
//!     <cloudiness id="NN" percent="12.5"/>
//!   </location>
//! </time>
//! ```
//!
//! Instants carry the readings; windows of one to six hours carry the
//! `<symbol code="..">` and precipitation.

use chrono::{DateTime, FixedOffset};
use domain::{ForecastEntry, SkyCode};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use tracing::{debug, warn};

use crate::client::MetNoError;

/// Parse a classic document into raw entries, in document order
///
/// Unreadable numbers leave the field absent; a `<time>` with unreadable
/// timestamps is skipped.
///
/// # Errors
///
/// Returns `MetNoError::ParseError` if the document is not well-formed XML.
pub fn parse_classic(xml: &str) -> Result<Vec<ForecastEntry>, MetNoError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut current: Option<ForecastEntry> = None;
    let mut skipped = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"time" {
                    current = open_time(&e);
                    if current.is_none() {
                        skipped += 1;
                    }
                } else if let Some(entry) = current.as_mut() {
                    read_reading(&e, entry);
                }
            },
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"time" {
                    match open_time(&e) {
                        Some(entry) => entries.push(entry),
                        None => skipped += 1,
                    }
                } else if let Some(entry) = current.as_mut() {
                    read_reading(&e, entry);
                }
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"time" {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(MetNoError::ParseError(format!(
                    "XML error at position {}: {e}",
                    reader.error_position()
                )));
            },
            _ => {},
        }
        buf.clear();
    }

    debug!(entries = entries.len(), skipped, "Parsed classic forecast");
    Ok(entries)
}

fn open_time(e: &BytesStart<'_>) -> Option<ForecastEntry> {
    let from = attribute(e, b"from");
    let to = attribute(e, b"to");
    match (from.as_deref().and_then(timestamp), to.as_deref().and_then(timestamp)) {
        (Some(from), Some(to)) => Some(ForecastEntry::period(from, to)),
        _ => {
            warn!(?from, ?to, "Skipping <time> with unreadable timestamps");
            None
        },
    }
}

fn read_reading(e: &BytesStart<'_>, entry: &mut ForecastEntry) {
    match e.local_name().as_ref() {
        b"temperature" => entry.temperature_c = number(e, b"value"),
        b"windSpeed" => entry.wind_speed_mps = number(e, b"mps"),
        b"cloudiness" => entry.cloudiness_pct = number(e, b"percent"),
        b"symbol" => {
            entry.sky_code = attribute(e, b"code").and_then(|code| SkyCode::new(code).ok());
        },
        _ => {},
    }
}

fn timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

fn number(e: &BytesStart<'_>, name: &[u8]) -> Option<f64> {
    let raw = attribute(e, name)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(
                element = %String::from_utf8_lossy(e.local_name().as_ref()),
                value = %raw,
                "Ignoring unreadable number"
            );
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<weatherdata created="2025-06-02T06:00:00Z">
  <product class="pointData">{body}</product>
</weatherdata>"#
        )
    }

    #[test]
    fn reads_instant_readings() {
        let xml = doc(
            r#"<time datatype="forecast" from="2025-06-02T10:00:00Z" to="2025-06-02T10:00:00Z">
                 <location altitude="30" latitude="58.9100" longitude="5.7200">
                   <temperature id="TTT" unit="celsius" value="14.2"/>
                   <windSpeed id="ff" mps="3.4" beaufort="3" name="Lett bris"/>
                   <cloudiness id="NN" percent="12.5"/>
                 </location>
               </time>"#,
        );
        let entries = parse_classic(&xml).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert!(entry.is_instant());
        assert_eq!(entry.temperature_c, Some(14.2));
        assert_eq!(entry.wind_speed_mps, Some(3.4));
        assert_eq!(entry.cloudiness_pct, Some(12.5));
        assert!(entry.sky_code.is_none());
    }

    #[test]
    fn reads_period_symbol() {
        let xml = doc(
            r#"<time datatype="forecast" from="2025-06-02T09:00:00Z" to="2025-06-02T10:00:00Z">
                 <location altitude="30" latitude="58.9100" longitude="5.7200">
                   <precipitation unit="mm" value="0.0"/>
                   <symbol id="PartlyCloud" number="3" code="partlycloudy_day"/>
                 </location>
               </time>"#,
        );
        let entries = parse_classic(&xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_instant());
        assert_eq!(entries[0].sky_code.as_ref().map(SkyCode::as_str), Some("partlycloudy_day"));
        assert!(entries[0].temperature_c.is_none());
    }

    #[test]
    fn keeps_stated_offset() {
        let xml = doc(
            r#"<time from="2025-06-02T12:00:00+02:00" to="2025-06-02T12:00:00+02:00">
                 <location><temperature value="9"/></location>
               </time>"#,
        );
        let entries = parse_classic(&xml).unwrap();
        assert_eq!(entries[0].from.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn unreadable_number_leaves_field_absent() {
        let xml = doc(
            r#"<time from="2025-06-02T10:00:00Z" to="2025-06-02T10:00:00Z">
                 <location>
                   <temperature value="n/a"/>
                   <windSpeed mps="NaN"/>
                 </location>
               </time>"#,
        );
        let entries = parse_classic(&xml).unwrap();
        assert!(entries[0].temperature_c.is_none());
        assert!(entries[0].wind_speed_mps.is_none());
    }

    #[test]
    fn bad_timestamp_skips_entry() {
        let xml = doc(
            r#"<time from="yesterday" to="2025-06-02T10:00:00Z">
                 <location><temperature value="9"/></location>
               </time>
               <time from="2025-06-02T11:00:00Z" to="2025-06-02T11:00:00Z">
                 <location><temperature value="10"/></location>
               </time>"#,
        );
        let entries = parse_classic(&xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].temperature_c, Some(10.0));
    }

    #[test]
    fn readings_of_skipped_entry_do_not_leak() {
        let xml = doc(
            r#"<time from="2025-06-02T10:00:00Z" to="2025-06-02T10:00:00Z">
                 <location><windSpeed mps="2"/></location>
               </time>
               <time from="bad" to="bad">
                 <location><temperature value="30"/></location>
               </time>"#,
        );
        let entries = parse_classic(&xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].temperature_c.is_none());
    }

    #[test]
    fn blank_symbol_code_is_absent() {
        let xml = doc(
            r#"<time from="2025-06-02T09:00:00Z" to="2025-06-02T10:00:00Z">
                 <location><symbol code="  "/></location>
               </time>"#,
        );
        let entries = parse_classic(&xml).unwrap();
        assert!(entries[0].sky_code.is_none());
    }

    #[test]
    fn empty_product_yields_no_entries() {
        assert!(parse_classic(&doc("")).unwrap().is_empty());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let result = parse_classic("<weatherdata><product></weatherdata>");
        assert!(matches!(result, Err(MetNoError::ParseError(_))));
    }

    #[test]
    fn readings_outside_time_are_ignored() {
        let xml = doc(r#"<temperature value="40"/>"#);
        assert!(parse_classic(&xml).unwrap().is_empty());
    }
}
