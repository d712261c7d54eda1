//! User profile inputs for day classification.
//!
//! This module defines [`WorkingDaysConfig`] and [`Profile`]. Both are
//! read-only inputs owned by the caller and passed explicitly into every
//! classification call.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Per-weekday "is working day" flags.
///
/// A weekday without an entry is treated as non-working.
///
/// # Example
///
/// ```
/// use workday_calendar::models::WorkingDaysConfig;
/// use chrono::Weekday;
///
/// let config: WorkingDaysConfig = serde_json::from_str(r#"{"monday": true}"#).unwrap();
/// assert!(config.is_working_day(Weekday::Mon));
/// assert!(!config.is_working_day(Weekday::Tue));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysConfig {
    /// Monday flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<bool>,
    /// Tuesday flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<bool>,
    /// Wednesday flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<bool>,
    /// Thursday flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<bool>,
    /// Friday flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<bool>,
    /// Saturday flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<bool>,
    /// Sunday flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<bool>,
}

impl WorkingDaysConfig {
    /// A Monday to Friday working week.
    pub fn monday_to_friday() -> Self {
        Self {
            monday: Some(true),
            tuesday: Some(true),
            wednesday: Some(true),
            thursday: Some(true),
            friday: Some(true),
            saturday: Some(false),
            sunday: Some(false),
        }
    }

    /// Returns the raw entry for a weekday, `None` when unconfigured.
    pub fn entry(&self, weekday: Weekday) -> Option<bool> {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Returns true if the weekday is configured as a working day.
    ///
    /// Unconfigured weekdays are non-working.
    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        self.entry(weekday).unwrap_or(false)
    }
}

/// The profile fields the calendar reads: working days and federal state.
///
/// `state` is kept as free text. Names outside the known set are accepted
/// and simply never match a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The user's working week.
    pub workingdays: WorkingDaysConfig,
    /// The user's federal state, by full name (e.g. "Bayern").
    pub state: String,
}

impl Profile {
    /// Creates a profile from a working week and a state name.
    pub fn new(workingdays: WorkingDaysConfig, state: impl Into<String>) -> Self {
        Self {
            workingdays,
            state: state.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_working_days() {
        let config = WorkingDaysConfig::default();
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(config.entry(weekday), None);
            assert!(!config.is_working_day(weekday));
        }
    }

    #[test]
    fn test_monday_to_friday() {
        let config = WorkingDaysConfig::monday_to_friday();
        assert!(config.is_working_day(Weekday::Mon));
        assert!(config.is_working_day(Weekday::Fri));
        assert!(!config.is_working_day(Weekday::Sat));
        assert!(!config.is_working_day(Weekday::Sun));
    }

    #[test]
    fn test_explicit_false_is_non_working() {
        let config = WorkingDaysConfig {
            wednesday: Some(false),
            ..WorkingDaysConfig::monday_to_friday()
        };
        assert_eq!(config.entry(Weekday::Wed), Some(false));
        assert!(!config.is_working_day(Weekday::Wed));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{"monday": true, "tuesday": false, "saturday": true}"#;
        let config: WorkingDaysConfig = serde_json::from_str(json).unwrap();

        assert!(config.is_working_day(Weekday::Mon));
        assert!(!config.is_working_day(Weekday::Tue));
        assert!(config.is_working_day(Weekday::Sat));
        assert_eq!(config.entry(Weekday::Thu), None);
    }

    #[test]
    fn test_serialize_skips_missing_entries() {
        let config = WorkingDaysConfig {
            friday: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"friday":true}"#);
    }

    #[test]
    fn test_deserialize_profile() {
        let json = r#"{
            "workingdays": {"monday": true, "tuesday": true},
            "state": "Hessen"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.state, "Hessen");
        assert!(profile.workingdays.is_working_day(Weekday::Tue));
        assert!(!profile.workingdays.is_working_day(Weekday::Wed));
    }
}
