use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

const PHONE_PATTERN: &str = r"^\+?[0-9]{7,15}$";

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp; only the calendar
/// date is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub fn validate_date(raw: &str) -> Result<(), ValidationError> {
    match parse_date(raw) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("INVALID_DATE")
            .with_message(Cow::from("Date must be a valid date (e.g: 2024-10-19)"))),
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    match Regex::new(PHONE_PATTERN) {
        Ok(regex) if regex.is_match(phone) => Ok(()),
        _ => Err(ValidationError::new("INVALID_PHONE")
            .with_message(Cow::from("Phone number is invalid (e.g: +998901234567)"))),
    }
}

pub fn validate_stol_number(raw: &str) -> Result<(), ValidationError> {
    match raw.trim().parse::<i32>() {
        Ok(number) if number >= 1 => Ok(()),
        _ => Err(ValidationError::new("INVALID_STOL_NUMBER")
            .with_message(Cow::from("Stol number must be a positive number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_keep_only_the_calendar_day() {
        let expected = NaiveDate::from_ymd_opt(2026, 11, 2);
        assert_eq!(parse_date("2026-11-02"), expected);
        assert_eq!(parse_date("2026-11-02T23:30:00+00:00"), expected);
        assert_eq!(parse_date("02/11/2026"), None);
        assert_eq!(parse_date("2026-02-30"), None);
    }

    #[test]
    fn phones() {
        assert!(validate_phone("+998901234567").is_ok());
        assert!(validate_phone("901234567").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("+1").is_err());
    }

    #[test]
    fn stol_numbers() {
        assert!(validate_stol_number("3").is_ok());
        assert!(validate_stol_number("0").is_err());
        assert!(validate_stol_number("three").is_err());
    }
}
