//! Public holiday lookup.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::HolidayTable;
use crate::models::{UNKNOWN_REGION_CODE, region_code};

/// Returns true if `date` is a public holiday in the named federal state.
///
/// A date is a holiday iff a record for exactly that day has the state's
/// column set to the string `"1"`. A state name outside the known set never
/// matches anything; the lookup then returns `false` instead of failing.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::is_holiday;
/// use workday_calendar::config::HolidayTable;
/// use workday_calendar::models::HolidayRecord;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let holidays = HolidayTable::new(vec![HolidayRecord::new(new_year, "Neujahr", &["by"])]);
///
/// assert!(is_holiday(new_year, "Bayern", &holidays));
/// assert!(!is_holiday(new_year, "Berlin", &holidays));
/// assert!(!is_holiday(new_year, "Atlantis", &holidays));
/// ```
pub fn is_holiday(date: NaiveDate, region: &str, holidays: &HolidayTable) -> bool {
    let code = region_code(region);
    if code == UNKNOWN_REGION_CODE {
        debug!(region = %region, %date, "Unknown region, no holiday can match");
        return false;
    }

    holidays
        .records_on(date)
        .iter()
        .any(|record| record.is_flagged(code))
}
