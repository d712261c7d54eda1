//! Federal states and their holiday dataset short codes.
//!
//! The holiday dataset carries one column per federal state, keyed by a
//! two-letter short code. Profiles store the full state name, so every
//! holiday lookup first goes through [`region_code`].

use serde::{Deserialize, Serialize};

/// Sentinel short code for region names outside the known set.
///
/// No holiday record carries this column, so a lookup with it never matches.
pub const UNKNOWN_REGION_CODE: &str = "unknown";

/// A German federal state.
///
/// # Example
///
/// ```
/// use workday_calendar::models::Region;
///
/// let region = Region::from_name("Bayern").unwrap();
/// assert_eq!(region, Region::Bayern);
/// assert_eq!(region.code(), "by");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Baden-Württemberg (`bw`).
    #[serde(rename = "Baden-Württemberg")]
    BadenWuerttemberg,
    /// Bayern (`by`).
    Bayern,
    /// Berlin (`be`).
    Berlin,
    /// Brandenburg (`bb`).
    Brandenburg,
    /// Bremen (`hb`).
    Bremen,
    /// Hamburg (`hh`).
    Hamburg,
    /// Hessen (`he`).
    Hessen,
    /// Mecklenburg-Vorpommern (`mv`).
    #[serde(rename = "Mecklenburg-Vorpommern")]
    MecklenburgVorpommern,
    /// Niedersachsen (`ni`).
    Niedersachsen,
    /// Nordrhein-Westfalen (`nw`).
    #[serde(rename = "Nordrhein-Westfalen")]
    NordrheinWestfalen,
    /// Rheinland-Pfalz (`rp`).
    #[serde(rename = "Rheinland-Pfalz")]
    RheinlandPfalz,
    /// Saarland (`sl`).
    Saarland,
    /// Sachsen-Anhalt (`st`).
    #[serde(rename = "Sachsen-Anhalt")]
    SachsenAnhalt,
    /// Sachsen (`sn`).
    Sachsen,
    /// Schleswig-Holstein (`sh`).
    #[serde(rename = "Schleswig-Holstein")]
    SchleswigHolstein,
    /// Thüringen (`th`).
    #[serde(rename = "Thüringen")]
    Thueringen,
}

impl Region {
    /// All federal states, in the order they are offered in the profile form.
    pub const ALL: [Region; 16] = [
        Region::BadenWuerttemberg,
        Region::Bayern,
        Region::Berlin,
        Region::Brandenburg,
        Region::Bremen,
        Region::Hamburg,
        Region::Hessen,
        Region::MecklenburgVorpommern,
        Region::Niedersachsen,
        Region::NordrheinWestfalen,
        Region::RheinlandPfalz,
        Region::Saarland,
        Region::SachsenAnhalt,
        Region::Sachsen,
        Region::SchleswigHolstein,
        Region::Thueringen,
    ];

    /// Returns the full state name as stored in user profiles.
    pub fn name(self) -> &'static str {
        match self {
            Region::BadenWuerttemberg => "Baden-Württemberg",
            Region::Bayern => "Bayern",
            Region::Berlin => "Berlin",
            Region::Brandenburg => "Brandenburg",
            Region::Bremen => "Bremen",
            Region::Hamburg => "Hamburg",
            Region::Hessen => "Hessen",
            Region::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Region::Niedersachsen => "Niedersachsen",
            Region::NordrheinWestfalen => "Nordrhein-Westfalen",
            Region::RheinlandPfalz => "Rheinland-Pfalz",
            Region::Saarland => "Saarland",
            Region::SachsenAnhalt => "Sachsen-Anhalt",
            Region::Sachsen => "Sachsen",
            Region::SchleswigHolstein => "Schleswig-Holstein",
            Region::Thueringen => "Thüringen",
        }
    }

    /// Returns the short code used as the column key in the holiday dataset.
    pub fn code(self) -> &'static str {
        match self {
            Region::BadenWuerttemberg => "bw",
            Region::Bayern => "by",
            Region::Berlin => "be",
            Region::Brandenburg => "bb",
            Region::Bremen => "hb",
            Region::Hamburg => "hh",
            Region::Hessen => "he",
            Region::MecklenburgVorpommern => "mv",
            Region::Niedersachsen => "ni",
            Region::NordrheinWestfalen => "nw",
            Region::RheinlandPfalz => "rp",
            Region::Saarland => "sl",
            Region::SachsenAnhalt => "st",
            Region::Sachsen => "sn",
            Region::SchleswigHolstein => "sh",
            Region::Thueringen => "th",
        }
    }

    /// Looks up a state by its exact full name.
    ///
    /// Matching is exact: no trimming, no case folding.
    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|region| region.name() == name)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a free-text state name to its holiday dataset short code.
///
/// Total over all inputs: names outside the known set map to
/// [`UNKNOWN_REGION_CODE`] instead of failing.
///
/// # Example
///
/// ```
/// use workday_calendar::models::{region_code, UNKNOWN_REGION_CODE};
///
/// assert_eq!(region_code("Sachsen-Anhalt"), "st");
/// assert_eq!(region_code("Sachsen"), "sn");
/// assert_eq!(region_code("Tirol"), UNKNOWN_REGION_CODE);
/// ```
pub fn region_code(name: &str) -> &'static str {
    Region::from_name(name)
        .map(Region::code)
        .unwrap_or(UNKNOWN_REGION_CODE)
}
