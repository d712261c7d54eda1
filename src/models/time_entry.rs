//! Daily time entries.
//!
//! Working time and available time are stored as whole minutes and edited
//! as `HH:MM` strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Time recorded for a single day.
///
/// # Example
///
/// ```
/// use workday_calendar::models::TimeEntry;
/// use chrono::NaiveDate;
///
/// let mut entry = TimeEntry::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), true);
/// entry.set_working_time("07:30").unwrap();
/// assert_eq!(entry.working_time, 450);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// The day this entry belongs to.
    pub day: NaiveDate,
    /// Minutes worked.
    pub working_time: u32,
    /// Minutes of available (preparation) time used.
    pub available_time: u32,
    /// Free-text note on the available time.
    #[serde(default)]
    pub notes: String,
    /// Whether the day is a workday for the profile it was created for.
    ///
    /// Informational only: time may still be recorded on non-workdays.
    pub workday: bool,
}

impl TimeEntry {
    /// Creates an empty entry for a day.
    pub fn new(day: NaiveDate, workday: bool) -> Self {
        Self {
            day,
            working_time: 0,
            available_time: 0,
            notes: String::new(),
            workday,
        }
    }

    /// Sets the working time from an `HH:MM` string.
    pub fn set_working_time(&mut self, value: &str) -> CalendarResult<()> {
        self.working_time = minutes_from_time(value)?;
        Ok(())
    }

    /// Sets the available time from an `HH:MM` string.
    pub fn set_available_time(&mut self, value: &str) -> CalendarResult<()> {
        self.available_time = minutes_from_time(value)?;
        Ok(())
    }
}

/// Formats minutes as `HH:MM`.
///
/// ```
/// use workday_calendar::models::minutes_to_time;
///
/// assert_eq!(minutes_to_time(0), "00:00");
/// assert_eq!(minutes_to_time(485), "08:05");
/// ```
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parses an `HH:MM` string into minutes.
///
/// An empty string is zero minutes, matching an untouched time field.
pub fn minutes_from_time(value: &str) -> CalendarResult<u32> {
    if value.is_empty() {
        return Ok(0);
    }

    let invalid = |message: &str| CalendarError::InvalidTime {
        value: value.to_string(),
        message: message.to_string(),
    };

    let (hours, minutes) = value.split_once(':').ok_or_else(|| invalid("expected HH:MM"))?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return Err(invalid("expected HH:MM"));
    }

    let hours: u32 = hours.parse().map_err(|_| invalid("hours are not a number"))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| invalid("minutes are not a number"))?;

    if hours > 23 {
        return Err(invalid("hours must be between 00 and 23"));
    }
    if minutes > 59 {
        return Err(invalid("minutes must be between 00 and 59"));
    }

    Ok(hours * 60 + minutes)
}

/// Sums of a month's time entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Total minutes worked.
    pub working_minutes: u32,
    /// Total minutes of available time.
    pub available_minutes: u32,
    /// Number of entries flagged as workdays.
    pub workdays: u32,
}

impl MonthlyTotals {
    /// Sums a set of entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Self {
        entries
            .into_iter()
            .fold(MonthlyTotals::default(), |mut totals, entry| {
                totals.working_minutes += entry.working_time;
                totals.available_minutes += entry.available_time;
                if entry.workday {
                    totals.workdays += 1;
                }
                totals
            })
    }

    /// Total working time in hours.
    pub fn working_hours(&self) -> Decimal {
        Decimal::from(self.working_minutes) / Decimal::from(60)
    }

    /// Total available time in hours.
    pub fn available_hours(&self) -> Decimal {
        Decimal::from(self.available_minutes) / Decimal::from(60)
    }
}
