//! Absence color lookup.

use crate::models::AbsenceType;

/// Returns the calendar color for an absence label.
///
/// Unknown labels have no color, which means "no visual override".
///
/// # Example
///
/// ```
/// use workday_calendar::calendar::absence_color;
///
/// assert_eq!(absence_color("Krankheit"), Some("#e5524f"));
/// assert_eq!(absence_color("Unknown Type"), None);
/// ```
pub fn absence_color(label: &str) -> Option<&'static str> {
    AbsenceType::from_label(label).map(AbsenceType::color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(absence_color("Urlaub"), Some("#35a6a6"));
        assert_eq!(absence_color("Krankheit"), Some("#e5524f"));
        assert_eq!(absence_color("Gleittag"), Some("#b5dfe0"));
        assert_eq!(absence_color("Umzug"), Some("#d5e64b"));
        assert_eq!(absence_color("Golde Hochzeit Eltern"), Some("#d5e64b"));
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(absence_color("Unknown Type"), None);
        assert_eq!(absence_color(""), None);
        assert_eq!(absence_color("URLAUB"), None);
    }

    #[test]
    fn test_lookup_is_stable() {
        for absence_type in AbsenceType::ALL {
            let label = absence_type.label();
            assert_eq!(absence_color(label), absence_color(label));
        }
    }
}
