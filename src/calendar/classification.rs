//! Per-day classification of calendar ranges.
//!
//! Combines the workday classifier, the holiday lookup and an absence
//! lookup into the [`DayClassification`] a calendar view paints.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::config::HolidayTable;
use crate::models::{Absence, DayClassification, Profile, Region, TimeEntry};

use super::absence_color::absence_color;
use super::holiday_check::is_holiday;
use super::workday::is_workday;

/// Returns the lookup key for a day: its midnight as a UTC unix timestamp.
///
/// ```
/// use workday_calendar::calendar::day_timestamp;
/// use chrono::NaiveDate;
///
/// assert_eq!(day_timestamp(NaiveDate::from_ymd_opt(1970, 1, 2).unwrap()), 86_400);
/// ```
pub fn day_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Source of recorded absences, keyed by [`day_timestamp`].
///
/// Lookups may suspend, for example on a document store. Each call is
/// independent; callers may query days in any order.
pub trait AbsenceLookup {
    /// Returns the absence recorded for the day starting at `timestamp`.
    fn absence_at(&self, timestamp: i64) -> impl Future<Output = Option<Absence>> + Send;
}

/// An in-memory [`AbsenceLookup`].
///
/// Later entries for the same day replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct AbsenceBook {
    by_day: HashMap<i64, Absence>,
}

impl AbsenceBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an absence on its day.
    pub fn insert(&mut self, absence: Absence) {
        self.by_day.insert(day_timestamp(absence.date), absence);
    }

    /// Returns the number of days with an absence.
    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    /// Returns true if no absences are recorded.
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

impl FromIterator<Absence> for AbsenceBook {
    fn from_iter<I: IntoIterator<Item = Absence>>(iter: I) -> Self {
        let mut book = AbsenceBook::new();
        for absence in iter {
            book.insert(absence);
        }
        book
    }
}

impl AbsenceLookup for AbsenceBook {
    async fn absence_at(&self, timestamp: i64) -> Option<Absence> {
        self.by_day.get(&timestamp).cloned()
    }
}

/// Classifies a single day for a profile.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::classify_day;
/// use workday_calendar::config::HolidayTable;
/// use workday_calendar::models::{Absence, AbsenceType, Profile, WorkingDaysConfig};
/// use chrono::NaiveDate;
///
/// let profile = Profile::new(WorkingDaysConfig::monday_to_friday(), "Bayern");
/// let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let absence = Absence::new(date, AbsenceType::Vacation);
///
/// let day = classify_day(&profile, date, &HolidayTable::default(), Some(&absence));
/// assert!(day.is_workday);
/// assert_eq!(day.highlight(), Some("#35a6a6"));
/// ```
pub fn classify_day(
    profile: &Profile,
    date: NaiveDate,
    holidays: &HolidayTable,
    absence: Option<&Absence>,
) -> DayClassification {
    let label = absence
        .map(|a| a.absencetype.as_str())
        .filter(|label| !label.is_empty());

    DayClassification {
        date,
        is_workday: is_workday(&profile.workingdays, date, &profile.state, holidays),
        is_holiday: is_holiday(date, &profile.state, holidays),
        absence_type: label.map(str::to_string),
        absence_color: label.and_then(absence_color).map(str::to_string),
    }
}

/// Classifies every day of a range, looking each day's absence up independently.
pub async fn classify_range<L>(
    profile: &Profile,
    days: &[NaiveDate],
    holidays: &HolidayTable,
    absences: &L,
) -> Vec<DayClassification>
where
    L: AbsenceLookup + Sync,
{
    if Region::from_name(&profile.state).is_none() {
        warn!(
            state = %profile.state,
            days = days.len(),
            "Profile state is not a known region; no public holidays will be applied"
        );
    }

    let mut classified = Vec::with_capacity(days.len());
    for &date in days {
        let absence = absences.absence_at(day_timestamp(date)).await;
        classified.push(classify_day(profile, date, holidays, absence.as_ref()));
    }

    debug!(
        days = classified.len(),
        workdays = classified.iter().filter(|d| d.is_workday).count(),
        holidays = classified.iter().filter(|d| d.is_holiday).count(),
        "Classified date range"
    );

    classified
}

/// Returns an empty time entry for a day, flagged with its workday status.
pub fn blank_time_entry(profile: &Profile, date: NaiveDate, holidays: &HolidayTable) -> TimeEntry {
    TimeEntry::new(
        date,
        is_workday(&profile.workingdays, date, &profile.state, holidays),
    )
}
