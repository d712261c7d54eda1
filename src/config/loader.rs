//! Dataset loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the holiday
//! dataset from a directory of YAML and JSON files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{CalendarError, CalendarResult};
use crate::models::HolidayRecord;

use super::types::{CalendarConfig, CalendarMetadata, HolidayTable};

/// Loads and provides access to the holiday dataset.
///
/// # Directory Structure
///
/// ```text
/// config/de/
/// ├── calendar.yaml      # Dataset metadata
/// └── holidays/
///     ├── 2024.json      # Holiday records for 2024
///     └── 2025.json
/// ```
///
/// Each holiday file is a JSON array of records:
///
/// ```json
/// [{ "date": "2024-01-06", "name": "Heilige Drei Könige", "bw": "1", "by": "1", "be": "0" }]
/// ```
///
/// # Example
///
/// ```no_run
/// use workday_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/de").unwrap();
/// println!("Loaded {} holidays", loader.holidays().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads the dataset from the specified directory.
    ///
    /// Returns an error if:
    /// - `calendar.yaml` or the `holidays` directory is missing
    /// - the `holidays` directory contains no `.json` files
    /// - any file cannot be parsed
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("calendar.yaml");
        let metadata = Self::load_yaml::<CalendarMetadata>(&metadata_path)?;

        let holidays_dir = path.join("holidays");
        let records = Self::load_holidays(&holidays_dir)?;
        let holidays = HolidayTable::new(records);

        info!(
            dataset = %metadata.name,
            version = %metadata.version,
            records = holidays.len(),
            "Holiday dataset loaded"
        );

        Ok(Self {
            config: CalendarConfig::new(metadata, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalendarResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::DatasetNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalendarError::DatasetParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and parses a JSON file of holiday records.
    fn load_holiday_file(path: &Path) -> CalendarResult<Vec<HolidayRecord>> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::DatasetNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| CalendarError::DatasetParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> CalendarResult<Vec<HolidayRecord>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(CalendarError::DatasetNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| CalendarError::DatasetNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut records = Vec::new();
        let mut files = 0;

        for entry in entries {
            let entry = entry.map_err(|_| CalendarError::DatasetNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                records.extend(Self::load_holiday_file(&path)?);
                files += 1;
            }
        }

        if files == 0 {
            return Err(CalendarError::DatasetNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        Ok(records)
    }

    /// Returns the dataset metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        self.config.metadata()
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        self.config.holidays()
    }

    /// Returns the holiday records dated between `from` and `to`, inclusive.
    pub fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&HolidayRecord> {
        self.holidays().between(from, to).collect()
    }
}
