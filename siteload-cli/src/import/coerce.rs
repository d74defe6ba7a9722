//! Best-effort typed projection of cell text
//!
//! Cells are optional almost everywhere in the source workbooks, so every
//! parser distinguishes "cell was empty" from "cell held something
//! unparseable" and leaves the fallback decision to the caller.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Outcome of coercing optional cell text to a typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// The cell was empty or whitespace.
    Missing,
    Value(T),
    /// Present but unparseable; carries the original text.
    Invalid(String),
}

impl<T> Parsed<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Parsed::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Zero-value fallback used by the importer: `Missing` collapses silently,
/// `Invalid` collapses with a warning naming the field.
pub fn coerce_or<T>(parsed: Parsed<T>, field: &str, default: T) -> T {
    match parsed {
        Parsed::Value(v) => v,
        Parsed::Missing => default,
        Parsed::Invalid(text) => {
            log::warn!("field '{}': unparseable value '{}', using default", field, text);
            default
        }
    }
}

/// Date fallback: both `Missing` and `Invalid` become null, the latter with
/// a warning.
pub fn coerce_date(text: &str, field: &str) -> Option<DateTime<Utc>> {
    match parse_date(text) {
        Parsed::Value(v) => Some(v),
        Parsed::Missing => None,
        Parsed::Invalid(text) => {
            log::warn!("field '{}': unparseable date '{}', storing null", field, text);
            None
        }
    }
}

pub fn parse_int(text: &str) -> Parsed<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Parsed::Missing;
    }
    match text.parse::<i64>() {
        Ok(v) => Parsed::Value(v),
        Err(_) => Parsed::Invalid(text.to_string()),
    }
}

pub fn parse_float(text: &str) -> Parsed<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Parsed::Missing;
    }
    match text.parse::<f64>() {
        Ok(v) => Parsed::Value(v),
        Err(_) => Parsed::Invalid(text.to_string()),
    }
}

pub fn parse_bool(text: &str) -> Parsed<bool> {
    match text.trim() {
        "" => Parsed::Missing,
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Parsed::Value(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Parsed::Value(false),
        other => Parsed::Invalid(other.to_string()),
    }
}

/// Workbook date formats across source iterations: `01-02-06`, `01/02/06`.
const DATE_FORMATS: [&str; 2] = ["%m-%d-%y", "%m/%d/%y"];

pub fn parse_date(text: &str) -> Parsed<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return Parsed::Missing;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            let midnight = date.and_time(NaiveTime::MIN);
            return Parsed::Value(DateTime::from_naive_utc_and_offset(midnight, Utc));
        }
    }
    Parsed::Invalid(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_empty_text_is_missing_not_invalid() {
        assert_eq!(parse_int(""), Parsed::Missing);
        assert_eq!(parse_float("   "), Parsed::Missing);
        assert_eq!(parse_bool(""), Parsed::Missing);
        assert_eq!(parse_date(""), Parsed::Missing);
    }

    #[test]
    fn test_int_and_float_classification() {
        assert_eq!(parse_int("42"), Parsed::Value(42));
        assert_eq!(parse_int("4.2"), Parsed::Invalid("4.2".to_string()));
        assert_eq!(parse_float("0.25"), Parsed::Value(0.25));
        assert_eq!(parse_float("north"), Parsed::Invalid("north".to_string()));
    }

    #[test]
    fn test_bool_accepts_spreadsheet_spellings() {
        assert_eq!(parse_bool("TRUE"), Parsed::Value(true));
        assert_eq!(parse_bool("1"), Parsed::Value(true));
        assert_eq!(parse_bool("f"), Parsed::Value(false));
        assert_eq!(parse_bool("yes"), Parsed::Invalid("yes".to_string()));
    }

    #[test]
    fn test_both_date_formats_parse_to_utc_midnight() {
        let dashed = parse_date("03-14-20").value().unwrap();
        let slashed = parse_date("03/14/20").value().unwrap();
        assert_eq!(dashed, Utc.with_ymd_and_hms(2020, 3, 14, 0, 0, 0).unwrap());
        assert_eq!(dashed, slashed);
        assert_eq!(dashed.day(), 14);
        assert_eq!(parse_date("14.03.2020"), Parsed::Invalid("14.03.2020".to_string()));
    }

    #[test]
    fn test_coerce_or_substitutes_defaults() {
        assert_eq!(coerce_or(parse_int("7"), "area", 0), 7);
        assert_eq!(coerce_or(parse_int(""), "area", 0), 0);
        assert_eq!(coerce_or(parse_int("wide"), "area", 0), 0);
        assert_eq!(coerce_date("", "start_date"), None);
        assert_eq!(coerce_date("soon", "start_date"), None);
    }
}
