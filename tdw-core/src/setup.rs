//! The setup snapshot and the date helpers around it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{TdwError, TdwResult};

/// User-chosen scheduling parameters, as handed to the resolver.
///
/// The resolver treats this as a read-only snapshot and never rejects it;
/// `validate` is for the points where the user commits a setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRecord {
    /// ISO date (`YYYY-MM-DD`) of the first Monday.
    pub start_monday: String,
    pub weeks_count: u32,
    /// One theme id per week, in order.
    pub theme_ids: Vec<String>,
}

impl SetupRecord {
    pub fn new(start_monday: impl Into<String>, weeks_count: u32, theme_ids: Vec<String>) -> Self {
        SetupRecord {
            start_monday: start_monday.into(),
            weeks_count,
            theme_ids,
        }
    }

    /// The start date, if it parses and falls on a Monday.
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.start_monday).filter(|d| is_monday(*d))
    }

    /// Check date and week count, returning the message shown to the user.
    pub fn validate(&self) -> TdwResult<()> {
        let Some(date) = parse_iso_date(&self.start_monday) else {
            return Err(TdwError::InvalidSetup(
                "Bitte ein gültiges Startdatum wählen.".into(),
            ));
        };
        if !is_monday(date) {
            return Err(TdwError::InvalidSetup(
                "Das Startdatum muss ein Montag sein.".into(),
            ));
        }
        if self.weeks_count < 1 {
            return Err(TdwError::InvalidSetup(
                "Bitte mindestens 1 Woche auswählen.".into(),
            ));
        }
        Ok(())
    }
}

/// Require exactly one theme per week.
pub fn validate_selection<S: AsRef<str>>(weeks_count: u32, ids: &[S]) -> TdwResult<()> {
    if ids.len() != weeks_count as usize {
        return Err(TdwError::InvalidSetup(format!(
            "Bitte genau {weeks_count} Thema/Themen auswählen (aktuell: {}).",
            ids.len()
        )));
    }
    Ok(())
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// The next Monday strictly after `from`; a Monday yields the following week.
pub fn next_monday(from: NaiveDate) -> NaiveDate {
    let days_from_monday = i64::from(from.weekday().num_days_from_monday());
    from + Duration::days(7 - days_from_monday)
}

/// `dd.mm.yyyy`, as shown next to weekdays and week ranges.
pub fn format_de(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date_strict() {
        assert_eq!(parse_iso_date("2024-01-01"), Some(date(2024, 1, 1)));
        assert_eq!(parse_iso_date("2024-1-1"), None);
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("01.01.2024"), None);
    }

    #[test]
    fn test_start_date_requires_monday() {
        assert_eq!(
            SetupRecord::new("2024-01-01", 1, vec![]).start_date(),
            Some(date(2024, 1, 1))
        );
        // 2024-01-02 is a Tuesday
        assert_eq!(SetupRecord::new("2024-01-02", 1, vec![]).start_date(), None);
    }

    #[test]
    fn test_next_monday() {
        // Wednesday -> following Monday
        assert_eq!(next_monday(date(2024, 1, 3)), date(2024, 1, 8));
        // Sunday -> next day
        assert_eq!(next_monday(date(2024, 1, 7)), date(2024, 1, 8));
        // Monday -> one week later
        assert_eq!(next_monday(date(2024, 1, 1)), date(2024, 1, 8));
        // Across a year boundary
        assert_eq!(next_monday(date(2025, 12, 31)), date(2026, 1, 5));
    }

    #[test]
    fn test_validate_messages() {
        let err = SetupRecord::new("", 1, vec![]).validate().unwrap_err();
        assert_eq!(err.to_string(), "Bitte ein gültiges Startdatum wählen.");

        let err = SetupRecord::new("2024-01-03", 1, vec![]).validate().unwrap_err();
        assert_eq!(err.to_string(), "Das Startdatum muss ein Montag sein.");

        let err = SetupRecord::new("2024-01-01", 0, vec![]).validate().unwrap_err();
        assert_eq!(err.to_string(), "Bitte mindestens 1 Woche auswählen.");

        assert!(SetupRecord::new("2024-01-01", 3, vec![]).validate().is_ok());
    }

    #[test]
    fn test_validate_selection_count() {
        assert!(validate_selection(2, &["a", "b"]).is_ok());
        let err = validate_selection(3, &["a"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bitte genau 3 Thema/Themen auswählen (aktuell: 1)."
        );
    }

    #[test]
    fn test_format_de() {
        assert_eq!(format_de(date(2024, 3, 5)), "05.03.2024");
    }
}
