//! Core data models for the workday calendar.
//!
//! This module contains the domain types shared by the classification core,
//! the dataset loader and the HTTP API.

mod absence;
mod day_classification;
mod holiday;
mod profile;
mod region;
mod time_entry;

pub use absence::{Absence, AbsenceType, LegendEntry, NON_WORKDAY_COLOR, legend};
pub use day_classification::DayClassification;
pub use holiday::{HOLIDAY_FLAG, HolidayRecord};
pub use profile::{Profile, WorkingDaysConfig};
pub use region::{Region, UNKNOWN_REGION_CODE, region_code};
pub use time_entry::{MonthlyTotals, TimeEntry, minutes_from_time, minutes_to_time};
