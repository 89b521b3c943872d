use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Rejected user input from the CLI or the add-task form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time `{0}`: expected HH:MM")]
    InvalidTime(String),
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), crate::domain::DATE_KEY_FORMAT)
        .map_err(|_| InputError::InvalidDate(raw.to_string()))
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| InputError::InvalidTime(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-10"), Ok(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
        assert_eq!(
            parse_date("10/03/2024"),
            Err(InputError::InvalidDate("10/03/2024".to_string()))
        );
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time(" 09:30 "), Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap()));
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = InputError::InvalidTime("noon".to_string());
        assert_eq!(err.to_string(), "invalid time `noon`: expected HH:MM");
    }
}
