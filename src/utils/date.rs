use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Validate a `--date` argument and return it in canonical form.
/// Falls back to today when no date is given.
pub fn resolve_date(input: Option<&String>) -> AppResult<String> {
    match input {
        Some(s) => parse_date(s)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today_str()),
    }
}
