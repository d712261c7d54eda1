//! Absence types and their calendar colors.
//!
//! Labels are stored exactly as the absence records carry them (German,
//! including historical spellings), so parsing is an exact string match.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Background color for days that are not workdays.
pub const NON_WORKDAY_COLOR: &str = "#f5f5f5";

/// A recorded kind of absence.
///
/// # Example
///
/// ```
/// use workday_calendar::models::AbsenceType;
///
/// let absence = AbsenceType::from_label("Krankheit").unwrap();
/// assert_eq!(absence, AbsenceType::SickLeave);
/// assert_eq!(absence.color(), "#e5524f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbsenceType {
    /// Urlaub.
    #[serde(rename = "Urlaub")]
    Vacation,
    /// Krankheit.
    #[serde(rename = "Krankheit")]
    SickLeave,
    /// Gleittag.
    #[serde(rename = "Gleittag")]
    CompensationDay,
    /// Unbezahlter Urlaub.
    #[serde(rename = "Unbezahlter Urlaub")]
    UnpaidLeave,
    /// Eigene Eheschließung.
    #[serde(rename = "Eigene Eheschließung")]
    OwnWedding,
    /// Niederkunft Ehefrau.
    #[serde(rename = "Niederkunft Ehefrau")]
    SpouseChildbirth,
    /// Eheschließung Kind.
    #[serde(rename = "Eheschließung Kind")]
    ChildWedding,
    /// Tod Familienagehöriger.
    #[serde(rename = "Tod Familienagehöriger")]
    FamilyBereavement,
    /// Golde Hochzeit Eltern.
    #[serde(rename = "Golde Hochzeit Eltern")]
    ParentsGoldenWedding,
    /// Umzug.
    #[serde(rename = "Umzug")]
    Relocation,
    /// Schulung.
    #[serde(rename = "Schulung")]
    Training,
}

impl AbsenceType {
    /// All absence types, in legend order.
    pub const ALL: [AbsenceType; 11] = [
        AbsenceType::Vacation,
        AbsenceType::CompensationDay,
        AbsenceType::SickLeave,
        AbsenceType::UnpaidLeave,
        AbsenceType::OwnWedding,
        AbsenceType::SpouseChildbirth,
        AbsenceType::ChildWedding,
        AbsenceType::FamilyBereavement,
        AbsenceType::ParentsGoldenWedding,
        AbsenceType::Relocation,
        AbsenceType::Training,
    ];

    /// Returns the label as stored on absence records.
    pub fn label(self) -> &'static str {
        match self {
            AbsenceType::Vacation => "Urlaub",
            AbsenceType::SickLeave => "Krankheit",
            AbsenceType::CompensationDay => "Gleittag",
            AbsenceType::UnpaidLeave => "Unbezahlter Urlaub",
            AbsenceType::OwnWedding => "Eigene Eheschließung",
            AbsenceType::SpouseChildbirth => "Niederkunft Ehefrau",
            AbsenceType::ChildWedding => "Eheschließung Kind",
            AbsenceType::FamilyBereavement => "Tod Familienagehöriger",
            AbsenceType::ParentsGoldenWedding => "Golde Hochzeit Eltern",
            AbsenceType::Relocation => "Umzug",
            AbsenceType::Training => "Schulung",
        }
    }

    /// Returns the calendar color for this absence type.
    pub fn color(self) -> &'static str {
        match self {
            AbsenceType::Vacation => "#35a6a6",
            AbsenceType::SickLeave => "#e5524f",
            AbsenceType::CompensationDay => "#b5dfe0",
            AbsenceType::UnpaidLeave
            | AbsenceType::OwnWedding
            | AbsenceType::SpouseChildbirth
            | AbsenceType::ChildWedding
            | AbsenceType::FamilyBereavement
            | AbsenceType::ParentsGoldenWedding
            | AbsenceType::Relocation
            | AbsenceType::Training => "#d5e64b",
        }
    }

    /// Parses a stored label. Matching is exact.
    pub fn from_label(label: &str) -> Option<AbsenceType> {
        AbsenceType::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An absence record as returned by the absence lookup.
///
/// `absencetype` stays a raw label: records written by older clients may
/// carry labels this crate does not know, and those must not fail to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// The day of the absence.
    pub date: NaiveDate,
    /// The absence label (e.g. "Urlaub").
    pub absencetype: String,
}

impl Absence {
    /// Creates an absence of a known type.
    pub fn new(date: NaiveDate, absence_type: AbsenceType) -> Self {
        Self {
            date,
            absencetype: absence_type.label().to_string(),
        }
    }

    /// Returns the parsed absence type, if the label is known.
    pub fn absence_type(&self) -> Option<AbsenceType> {
        AbsenceType::from_label(&self.absencetype)
    }
}

/// One entry of the calendar legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// The displayed label.
    pub label: String,
    /// The color swatch.
    pub color: String,
}

/// Returns the calendar legend: every absence type plus the non-workday swatch.
pub fn legend() -> Vec<LegendEntry> {
    AbsenceType::ALL
        .iter()
        .map(|t| LegendEntry {
            label: t.label().to_string(),
            color: t.color().to_string(),
        })
        .chain(std::iter::once(LegendEntry {
            label: "Kein Arbeitstag".to_string(),
            color: NON_WORKDAY_COLOR.to_string(),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for absence_type in AbsenceType::ALL {
            assert_eq!(
                AbsenceType::from_label(absence_type.label()),
                Some(absence_type)
            );
        }
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(AbsenceType::Vacation.color(), "#35a6a6");
        assert_eq!(AbsenceType::SickLeave.color(), "#e5524f");
        assert_eq!(AbsenceType::CompensationDay.color(), "#b5dfe0");
    }

    #[test]
    fn test_life_events_share_a_color() {
        for absence_type in [
            AbsenceType::UnpaidLeave,
            AbsenceType::OwnWedding,
            AbsenceType::SpouseChildbirth,
            AbsenceType::ChildWedding,
            AbsenceType::FamilyBereavement,
            AbsenceType::ParentsGoldenWedding,
            AbsenceType::Relocation,
            AbsenceType::Training,
        ] {
            assert_eq!(absence_type.color(), "#d5e64b");
        }
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(AbsenceType::from_label("krankheit"), None);
        assert_eq!(AbsenceType::from_label("Krankheit "), None);
        assert_eq!(AbsenceType::from_label("Tod Familienangehöriger"), None);
        assert_eq!(AbsenceType::from_label(""), None);
    }

    #[test]
    fn test_serde_uses_stored_labels() {
        let json = serde_json::to_string(&AbsenceType::UnpaidLeave).unwrap();
        assert_eq!(json, "\"Unbezahlter Urlaub\"");

        let parsed: AbsenceType = serde_json::from_str("\"Gleittag\"").unwrap();
        assert_eq!(parsed, AbsenceType::CompensationDay);
    }

    #[test]
    fn test_absence_with_unknown_label_deserializes() {
        let absence: Absence =
            serde_json::from_str(r#"{"date": "2024-04-02", "absencetype": "Sabbatical"}"#)
                .unwrap();
        assert_eq!(absence.absencetype, "Sabbatical");
        assert_eq!(absence.absence_type(), None);
    }

    #[test]
    fn test_legend_lists_all_types_and_non_workday() {
        let entries = legend();
        assert_eq!(entries.len(), AbsenceType::ALL.len() + 1);
        assert_eq!(entries[0].label, "Urlaub");
        let last = entries.last().unwrap();
        assert_eq!(last.color, NON_WORKDAY_COLOR);
    }
}
