//! Request types for the workday calendar API.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Absence, Profile};

/// Request body for the `/calendar` endpoint.
///
/// Classifies every day of `date_range(from, to)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// The profile to classify for.
    pub profile: Profile,
    /// Start of the range (inclusive).
    pub from: NaiveDateTime,
    /// End of the range (exclusive, fractional days round up).
    pub to: NaiveDateTime,
    /// Absences recorded in the range.
    #[serde(default)]
    pub absences: Vec<Absence>,
}

/// Request body for the `/calendar/month` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRequest {
    /// The profile to classify for.
    pub profile: Profile,
    /// Any day of the requested month.
    pub month: NaiveDate,
    /// Absences recorded in the month.
    #[serde(default)]
    pub absences: Vec<Absence>,
}

/// Request body for the `/time-entries/month` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSheetRequest {
    /// The profile the time sheet belongs to.
    pub profile: Profile,
    /// Any day of the requested month.
    pub month: NaiveDate,
}

/// Query string for the `/holidays` endpoint.
///
/// Lists the holidays of `state` dated between `from` and `to`, inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayQuery {
    /// Full federal state name.
    pub state: String,
    /// First day to list.
    pub from: NaiveDate,
    /// Last day to list.
    pub to: NaiveDate,
}
