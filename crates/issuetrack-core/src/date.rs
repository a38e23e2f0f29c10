// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ISO-8601 date codec shared by the `GraphQLDate` scalar and the storage layer.
//!
//! Outbound values are always rendered with millisecond precision in UTC
//! (`2024-01-02T03:04:05.678Z`). Inbound text is accepted in the handful of
//! shapes clients actually send; everything else is rejected with `None`
//! rather than being coerced to some default instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Offset-less timestamp layouts, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Render a date as an ISO-8601 string.
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 date or timestamp.
///
/// Accepts RFC 3339 timestamps with any offset, offset-less timestamps and
/// bare calendar dates (midnight UTC). Returns `None` for anything that is
/// not a real calendar instant.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(input) {
        return Some(value.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(input, format) {
            return Some(value.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|value| value.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use proptest::prelude::*;

    #[test]
    fn formats_with_millis_and_zulu_suffix() {
        let value = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_date(&value), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn parses_rfc3339_and_normalizes_offset() {
        let parsed = parse_date("2024-01-02T05:04:05.250+02:00").unwrap();
        assert_eq!(format_date(&parsed), "2024-01-02T03:04:05.250Z");
    }

    #[test]
    fn parses_bare_date_as_utc_midnight() {
        let parsed = parse_date("2019-01-15").unwrap();
        assert_eq!(format_date(&parsed), "2019-01-15T00:00:00.000Z");
    }

    #[test]
    fn parses_offsetless_timestamp_as_utc() {
        let parsed = parse_date("2019-01-15T10:30:00").unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(format_date(&parsed), "2019-01-15T10:30:00.000Z");

        let minutes_only = parse_date("2019-01-15T10:30").unwrap();
        assert_eq!(minutes_only, parsed);
    }

    #[test]
    fn rejects_text_that_is_not_a_date() {
        assert!(parse_date("invalid date text").is_none());
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("   ").is_none());
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(parse_date("2023-02-30").is_none());
        assert!(parse_date("2023-13-01").is_none());
        assert!(parse_date("2023-01-01T25:00:00Z").is_none());
    }

    #[test]
    fn never_falls_back_to_the_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        for junk in ["0", "garbage", "1970", "Thu"] {
            assert_ne!(parse_date(junk), Some(epoch), "input {junk:?}");
        }
    }

    proptest! {
        #[test]
        fn format_then_parse_round_trips(millis in 0i64..253_402_300_799_000i64) {
            let value = Utc.timestamp_millis_opt(millis).unwrap();
            let rendered = format_date(&value);
            prop_assert_eq!(parse_date(&rendered), Some(value));
        }

        #[test]
        fn parse_then_format_is_stable(y in 1970i32..2200, m in 1u32..=12, d in 1u32..=28,
                                       h in 0u32..24, min in 0u32..60, s in 0u32..60) {
            let text = format!("{y:04}-{m:02}-{d:02}T{h:02}:{min:02}:{s:02}Z");
            let parsed = parse_date(&text).unwrap();
            let rendered = format_date(&parsed);
            prop_assert_eq!(parse_date(&rendered), Some(parsed));
            prop_assert!(rendered.starts_with(&text[..19]));
        }

        #[test]
        fn alphabetic_text_never_parses(s in "[a-zA-Z ]{1,24}") {
            prop_assert!(parse_date(&s).is_none());
        }
    }
}
