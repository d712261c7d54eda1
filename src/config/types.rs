//! Configuration types for the workday calendar.
//!
//! This module contains the dataset metadata deserialized from
//! `calendar.yaml` and the immutable, date-indexed [`HolidayTable`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::calendar::Locale;
use crate::models::HolidayRecord;

/// Metadata about the holiday dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// ISO country code of the dataset (e.g. "DE").
    pub country: String,
    /// Human-readable name of the dataset.
    pub name: String,
    /// The dataset version.
    pub version: String,
    /// Where the holiday data was taken from.
    pub source_url: String,
    /// Locale used for weekday names.
    #[serde(default)]
    pub locale: Locale,
}

/// The public holiday table, loaded once and never mutated.
///
/// Records are indexed by date. Several records may share a date (for
/// example when two dataset files overlap); a lookup considers all of them.
///
/// # Example
///
/// ```
/// use workday_calendar::config::HolidayTable;
/// use workday_calendar::models::HolidayRecord;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let table = HolidayTable::new(vec![HolidayRecord::new(date, "Neujahr", &["by"])]);
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.records_on(date).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    by_date: BTreeMap<NaiveDate, Vec<HolidayRecord>>,
    len: usize,
}

impl HolidayTable {
    /// Builds a table from records in any order.
    pub fn new(records: Vec<HolidayRecord>) -> Self {
        let len = records.len();
        let mut by_date: BTreeMap<NaiveDate, Vec<HolidayRecord>> = BTreeMap::new();
        for record in records {
            by_date.entry(record.date).or_default().push(record);
        }
        Self { by_date, len }
    }

    /// Returns all records for a date, empty if there are none.
    pub fn records_on(&self, date: NaiveDate) -> &[HolidayRecord] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over all records in date order.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayRecord> {
        self.by_date.values().flatten()
    }

    /// Iterates over records with `from <= date <= to`, in date order.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = &HolidayRecord> {
        let range = if from <= to {
            Some(self.by_date.range(from..=to))
        } else {
            None
        };
        range.into_iter().flatten().flat_map(|(_, records)| records)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the earliest and latest covered dates.
    pub fn coverage(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.by_date.keys().next()?;
        let last = self.by_date.keys().next_back()?;
        Some((*first, *last))
    }
}

/// The complete calendar configuration loaded from a dataset directory.
#[derive(Debug, Clone)]
pub(crate) struct CalendarConfig {
    metadata: CalendarMetadata,
    holidays: HolidayTable,
}

impl CalendarConfig {
    /// Creates a new CalendarConfig from its component parts.
    pub fn new(metadata: CalendarMetadata, holidays: HolidayTable) -> Self {
        Self { metadata, holidays }
    }

    /// Returns the dataset metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn sample_table() -> HolidayTable {
        HolidayTable::new(vec![
            HolidayRecord::new(make_date("2024-12-25"), "1. Weihnachtstag", &["by", "be"]),
            HolidayRecord::new(make_date("2024-01-01"), "Neujahr", &["by", "be"]),
            HolidayRecord::new(make_date("2024-01-06"), "Heilige Drei Könige", &["by"]),
            HolidayRecord::new(make_date("2024-01-06"), "Heilige Drei Könige", &["bw"]),
        ])
    }

    #[test]
    fn test_records_are_indexed_by_date() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.records_on(make_date("2024-01-06")).len(), 2);
        assert_eq!(table.records_on(make_date("2024-01-01")).len(), 1);
        assert!(table.records_on(make_date("2024-01-02")).is_empty());
    }

    #[test]
    fn test_iter_is_date_ordered() {
        let table = sample_table();
        let dates: Vec<NaiveDate> = table.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_between_is_inclusive() {
        let table = sample_table();
        let names: Vec<&str> = table
            .between(make_date("2024-01-01"), make_date("2024-01-06"))
            .filter_map(|r| r.name.as_deref())
            .collect();
        assert_eq!(
            names,
            vec!["Neujahr", "Heilige Drei Könige", "Heilige Drei Könige"]
        );
    }

    #[test]
    fn test_between_with_reversed_bounds_is_empty() {
        let table = sample_table();
        assert_eq!(
            table
                .between(make_date("2024-12-31"), make_date("2024-01-01"))
                .count(),
            0
        );
    }

    #[test]
    fn test_coverage() {
        let table = sample_table();
        assert_eq!(
            table.coverage(),
            Some((make_date("2024-01-01"), make_date("2024-12-25")))
        );
        assert_eq!(HolidayTable::default().coverage(), None);
        assert!(HolidayTable::default().is_empty());
    }
}
