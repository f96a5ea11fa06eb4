//! Calendar date <-> wire instant conversion.
//!
//! A calendar date chosen in the UI is sent as the ISO-8601 instant of local
//! midnight of that day (`YYYY-MM-DDTHH:MM:SS.sssZ`). Reading an instant back
//! yields the local calendar date it falls on, so the two are inverse.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Format used by `<input type="date">`
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-mm-dd` input value. Empty or malformed input yields `None`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).ok()
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Local midnight of `date` as a UTC instant string with millisecond precision.
pub fn date_to_iso_instant(date: NaiveDate) -> String {
    let midnight = date.and_time(NaiveTime::MIN);
    let instant = match Local.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Midnight skipped by a DST jump; pin to UTC midnight instead
        None => Utc.from_utc_datetime(&midnight),
    };
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Local calendar date of an ISO instant. Bare `yyyy-mm-dd` values are
/// accepted as-is.
pub fn iso_instant_to_date(value: &str) -> Option<NaiveDate> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Local).date_naive());
    }
    parse_input_date(value.get(..10)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("2024-02-30"), None);
        assert_eq!(parse_input_date("15.03.2024"), None);
    }

    #[test]
    fn test_instant_shape() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 1).unwrap();
        let iso = date_to_iso_instant(date);
        assert_eq!(iso.len(), "1990-05-01T00:00:00.000Z".len());
        assert!(iso.ends_with('Z'));
        assert!(iso.contains(".000"));
    }

    #[test]
    fn test_round_trip_is_exact() {
        for (y, m, d) in [(1990, 5, 1), (2000, 2, 29), (2024, 12, 31), (1970, 1, 1)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(iso_instant_to_date(&date_to_iso_instant(date)), Some(date));
        }
    }

    #[test]
    fn test_bare_dates_and_garbage() {
        assert_eq!(
            iso_instant_to_date("2021-06-30"),
            NaiveDate::from_ymd_opt(2021, 6, 30)
        );
        assert_eq!(iso_instant_to_date("not a date"), None);
        assert_eq!(iso_instant_to_date(""), None);
    }
}
