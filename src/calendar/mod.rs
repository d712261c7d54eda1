//! Calendar logic for the workday calendar.
//!
//! This module contains the pure classification functions: public holiday
//! lookup per federal state, workday classification against a working week,
//! date range generation for calendar views, absence colors and weekday
//! names. None of these functions fail; unknown input degrades to
//! "not a holiday", "not a workday" or "no color".

mod absence_color;
mod classification;
mod date_range;
mod holiday_check;
mod weekday;
mod workday;

pub use absence_color::absence_color;
pub use classification::{
    AbsenceBook, AbsenceLookup, blank_time_entry, classify_day, classify_range, day_timestamp,
};
pub use date_range::{
    date_range, day_range, end_of_month, month_range, range_length, start_of_month,
};
pub use holiday_check::is_holiday;
pub use weekday::{Locale, is_weekend, weekday_name};
pub use workday::is_workday;
