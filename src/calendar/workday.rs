//! Workday classification.

use chrono::{Datelike, NaiveDate};

use crate::config::HolidayTable;
use crate::models::WorkingDaysConfig;

use super::holiday_check::is_holiday;

/// Returns true if `date` is a workday for the given working week and state.
///
/// A public holiday is never a workday, whatever the working week says.
/// Otherwise the configured flag for the date's weekday decides, and an
/// unconfigured weekday counts as non-working.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::is_workday;
/// use workday_calendar::config::HolidayTable;
/// use workday_calendar::models::{HolidayRecord, WorkingDaysConfig};
/// use chrono::NaiveDate;
///
/// // 2024-01-01 is a Monday
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let holidays = HolidayTable::new(vec![HolidayRecord::new(new_year, "Neujahr", &["by"])]);
/// let week = WorkingDaysConfig::monday_to_friday();
///
/// assert!(!is_workday(&week, new_year, "Bayern", &holidays));
/// assert!(is_workday(&week, new_year.succ_opt().unwrap(), "Bayern", &holidays));
/// ```
pub fn is_workday(
    config: &WorkingDaysConfig,
    date: NaiveDate,
    region: &str,
    holidays: &HolidayTable,
) -> bool {
    let working_day = config.is_working_day(date.weekday());
    if is_holiday(date, region, holidays) {
        return false;
    }
    working_day
}
