//! Transaction dates: native chrono values or ISO-8601 calendar-date strings.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// A date as supplied by the caller.
///
/// Native `Date`/`DateTime` values are accepted as-is. `Text` is parsed, and
/// any other JSON value is parsed from its JSON rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Text(String),
    Other(serde_json::Value),
    #[serde(skip_deserializing)]
    Date(NaiveDate),
    #[serde(skip_deserializing)]
    DateTime(NaiveDateTime),
}

impl DateInput {
    /// Returns `true` if this is a native value or a well-formed `YYYY-MM-DD` string.
    pub fn is_valid(&self) -> bool {
        match self {
            DateInput::Date(_) | DateInput::DateTime(_) => true,
            DateInput::Text(s) => parse_iso_date(s).is_some(),
            DateInput::Other(value) => parse_iso_date(&value.to_string()).is_some(),
        }
    }
}

/// Parses a strict ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// The shape is checked before handing off to chrono, which on its own would
/// also accept single-digit months/days and signed or extended years. Year 0
/// is rejected; the earliest date is `0001-01-01`.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .filter(|date| date.year() >= 1)
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dates() {
        assert_eq!(
            parse_iso_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert!(parse_iso_date("2024-02-29").is_some());
        assert!(parse_iso_date("0001-01-01").is_some());
    }

    #[test]
    fn test_parse_rejects_impossible_calendar_days() {
        assert!(parse_iso_date("2024-13-40").is_none());
        assert!(parse_iso_date("2023-02-29").is_none());
        assert!(parse_iso_date("2024-04-31").is_none());
        assert!(parse_iso_date("2024-00-10").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_shapes() {
        assert!(parse_iso_date("").is_none());
        assert!(parse_iso_date("2024-1-5").is_none());
        assert!(parse_iso_date(" 2024-01-15").is_none());
        assert!(parse_iso_date("2024/01/15").is_none());
        assert!(parse_iso_date("2024-01-15T10:00:00").is_none());
        assert!(parse_iso_date("+024-01-15").is_none());
        assert!(parse_iso_date("not a date").is_none());
    }

    #[test]
    fn test_parse_rejects_year_zero() {
        assert!(parse_iso_date("0000-01-01").is_none());
        assert!(parse_iso_date("0000-12-31").is_none());
    }

    #[test]
    fn test_non_string_json_is_stringified() {
        let date: DateInput = serde_json::from_str("20240501").unwrap();
        assert_eq!(date, DateInput::Other(serde_json::json!(20240501)));
        assert!(!date.is_valid());

        let date: DateInput = serde_json::from_str("true").unwrap();
        assert!(!date.is_valid());
    }

    #[test]
    fn test_native_values_always_valid() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert!(DateInput::from(date).is_valid());
        assert!(DateInput::from(date.and_hms_opt(23, 59, 59).unwrap()).is_valid());
    }

    #[test]
    fn test_text_validity() {
        assert!(DateInput::from("2024-05-01").is_valid());
        assert!(!DateInput::from("2024-13-40").is_valid());
    }
}
