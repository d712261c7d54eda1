//! Derived per-day display status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::absence::NON_WORKDAY_COLOR;

/// The computed status of one calendar day. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The classified day.
    pub date: NaiveDate,
    /// Configured working day and not a public holiday.
    pub is_workday: bool,
    /// Public holiday in the profile's region.
    pub is_holiday: bool,
    /// The absence label recorded for this day, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_type: Option<String>,
    /// The color for the recorded absence, if its label is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence_color: Option<String>,
}

impl DayClassification {
    /// Returns the background color the calendar should paint this day with.
    ///
    /// An absence color wins over the non-workday shade. Workdays without an
    /// absence have no highlight.
    ///
    /// # Example
    ///
    /// ```
    /// use workday_calendar::models::DayClassification;
    /// use chrono::NaiveDate;
    ///
    /// let day = DayClassification {
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
    ///     is_workday: false,
    ///     is_holiday: false,
    ///     absence_type: None,
    ///     absence_color: None,
    /// };
    /// assert_eq!(day.highlight(), Some("#f5f5f5"));
    /// ```
    pub fn highlight(&self) -> Option<&str> {
        match self.absence_color.as_deref() {
            Some(color) => Some(color),
            None if !self.is_workday => Some(NON_WORKDAY_COLOR),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(is_workday: bool, absence_color: Option<&str>) -> DayClassification {
        DayClassification {
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            is_workday,
            is_holiday: false,
            absence_type: absence_color.map(|_| "Urlaub".to_string()),
            absence_color: absence_color.map(str::to_string),
        }
    }

    #[test]
    fn test_workday_without_absence_has_no_highlight() {
        assert_eq!(day(true, None).highlight(), None);
    }

    #[test]
    fn test_non_workday_is_shaded() {
        assert_eq!(day(false, None).highlight(), Some(NON_WORKDAY_COLOR));
    }

    #[test]
    fn test_absence_color_wins() {
        assert_eq!(day(true, Some("#35a6a6")).highlight(), Some("#35a6a6"));
        assert_eq!(day(false, Some("#35a6a6")).highlight(), Some("#35a6a6"));
    }

    #[test]
    fn test_serialization_skips_missing_absence() {
        let json = serde_json::to_string(&day(true, None)).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-07-01","is_workday":true,"is_holiday":false}"#
        );
    }
}
