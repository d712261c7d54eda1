//! Date range generation for calendar views.
//!
//! Ranges are start-inclusive and end-exclusive. The number of days is the
//! ceiling of the (possibly fractional) day difference between the bounds,
//! so a month range built from start-of-month to end-of-month
//! (`23:59:59.999`) covers every day of that month.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Returns the number of days a range from `from` to `to` covers.
///
/// This is `ceil((to - from) / 1 day)`, clamped at zero.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::range_length;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(range_length(from, to), 3);
/// ```
pub fn range_length(from: NaiveDateTime, to: NaiveDateTime) -> u64 {
    let diff = to - from;
    if diff <= TimeDelta::zero() {
        return 0;
    }

    let whole_days = diff.num_days();
    let remainder = diff - TimeDelta::days(whole_days);
    let days = if remainder > TimeDelta::zero() {
        whole_days + 1
    } else {
        whole_days
    };
    days as u64
}

/// Returns every calendar day from `from` onward, [`range_length`] days long.
///
/// Days are produced eagerly in ascending order, one per offset from
/// `from`'s date. Reversed or equal bounds give an empty range.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::date_range;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let days = date_range(from, to);
///
/// assert_eq!(days.len(), 28);
/// assert_eq!(days.first(), Some(&NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// assert_eq!(days.last(), Some(&NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()));
/// ```
pub fn date_range(from: NaiveDateTime, to: NaiveDateTime) -> Vec<NaiveDate> {
    let start = from.date();
    (0..range_length(from, to))
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// [`date_range`] between two midnights.
pub fn day_range(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    date_range(from.and_time(NaiveTime::MIN), to.and_time(NaiveTime::MIN))
}

/// Returns midnight on the first day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDateTime {
    first_of_month(date).and_time(NaiveTime::MIN)
}

/// Returns `23:59:59.999` on the last day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDateTime {
    let last = first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    last.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time")
}

/// Returns every day of `date`'s month.
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::month_range;
/// use chrono::NaiveDate;
///
/// let days = month_range(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
/// assert_eq!(days.len(), 29);
/// ```
pub fn month_range(date: NaiveDate) -> Vec<NaiveDate> {
    date_range(start_of_month(date), end_of_month(date))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("every month has a first day")
}
