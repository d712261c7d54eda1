//! Public holiday records.
//!
//! One record per date, with one column per federal state short code. The
//! columns are string-typed: only the literal `"1"` marks a holiday.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The flag value that marks a date as a holiday in a region column.
pub const HOLIDAY_FLAG: &str = "1";

/// A single row of the holiday dataset.
///
/// # Example
///
/// ```
/// use workday_calendar::models::HolidayRecord;
///
/// let record: HolidayRecord = serde_json::from_str(
///     r#"{"date": "2024-01-06", "name": "Heilige Drei Könige", "bw": "1", "by": "1", "be": "0"}"#,
/// ).unwrap();
///
/// assert!(record.is_flagged("by"));
/// assert!(!record.is_flagged("be"));
/// assert!(!record.is_flagged("hh"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The holiday's name, if the dataset provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Region short code to raw flag value.
    ///
    /// Values are kept as parsed so that `1`, `true` or `"01"` are not
    /// mistaken for the `"1"` flag.
    #[serde(flatten)]
    pub regions: BTreeMap<String, Value>,
}

impl HolidayRecord {
    /// Creates a record flagging the given region codes and nothing else.
    pub fn new(date: NaiveDate, name: impl Into<String>, codes: &[&str]) -> Self {
        let regions = codes
            .iter()
            .map(|code| (code.to_string(), Value::String(HOLIDAY_FLAG.to_string())))
            .collect();
        Self {
            date,
            name: Some(name.into()),
            regions,
        }
    }

    /// Returns true if the column for `code` holds exactly the string `"1"`.
    pub fn is_flagged(&self, code: &str) -> bool {
        matches!(self.regions.get(code), Some(Value::String(flag)) if flag == HOLIDAY_FLAG)
    }
}
