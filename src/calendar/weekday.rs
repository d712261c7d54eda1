//! Locale-aware weekday resolution.
//!
//! Weekday names are resolved from an explicit [`Locale`] argument. Nothing
//! here depends on a process-wide locale setting.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A display locale for weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// German (`de`).
    #[default]
    #[serde(rename = "de")]
    German,
    /// English (`en`).
    #[serde(rename = "en")]
    English,
}

/// Returns the full weekday name in the given locale.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::{weekday_name, Locale};
/// use chrono::Weekday;
///
/// assert_eq!(weekday_name(Weekday::Sat, Locale::German), "Samstag");
/// assert_eq!(weekday_name(Weekday::Sat, Locale::English), "Saturday");
/// ```
pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    match locale {
        Locale::German => match weekday {
            Weekday::Mon => "Montag",
            Weekday::Tue => "Dienstag",
            Weekday::Wed => "Mittwoch",
            Weekday::Thu => "Donnerstag",
            Weekday::Fri => "Freitag",
            Weekday::Sat => "Samstag",
            Weekday::Sun => "Sonntag",
        },
        Locale::English => match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
    }
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_german_names() {
        // 2024-01-01 is a Monday
        let names: Vec<&str> = make_date("2024-01-01")
            .iter_days()
            .take(7)
            .map(|d| weekday_name(d.weekday(), Locale::German))
            .collect();
        assert_eq!(
            names,
            vec![
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
                "Sonntag"
            ]
        );
    }

    #[test]
    fn test_english_names() {
        assert_eq!(weekday_name(Weekday::Mon, Locale::English), "Monday");
        assert_eq!(weekday_name(Weekday::Sun, Locale::English), "Sunday");
    }

    #[test]
    fn test_is_weekend() {
        assert!(!is_weekend(make_date("2024-01-05"))); // Friday
        assert!(is_weekend(make_date("2024-01-06"))); // Saturday
        assert!(is_weekend(make_date("2024-01-07"))); // Sunday
        assert!(!is_weekend(make_date("2024-01-08"))); // Monday
    }

    #[test]
    fn test_locale_serialization() {
        assert_eq!(serde_json::to_string(&Locale::German).unwrap(), "\"de\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::English);
        assert_eq!(Locale::default(), Locale::German);
    }
}
