//! Continent lookup for ISO 3166-1 alpha-2 country codes.
//!
//! Transcontinental states are placed on the continent holding their capital
//! (Russia in Europe, Turkey and Kazakhstan in Asia, Egypt in Africa).
//! Unknown codes resolve to nothing, and a leg with an unresolved end is never
//! treated as cross-continental.

/// A continent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Continent {
    /// Africa.
    Africa,
    /// Antarctica and the sub-antarctic islands.
    Antarctica,
    /// Asia, including the Middle East.
    Asia,
    /// Europe.
    Europe,
    /// North and Central America and the Caribbean.
    NorthAmerica,
    /// Australia, New Zealand and the Pacific islands.
    Oceania,
    /// South America.
    SouthAmerica,
}

impl Continent {
    /// Return the continent as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "africa",
            Self::Antarctica => "antarctica",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::NorthAmerica => "north-america",
            Self::Oceania => "oceania",
            Self::SouthAmerica => "south-america",
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the continent for a country code.
///
/// Matching ignores ASCII case. Missing or unknown codes yield `None`.
///
/// # Examples
/// ```
/// use wayfarer_core::{Continent, continent_of};
///
/// assert_eq!(continent_of(Some("fr")), Some(Continent::Europe));
/// assert_eq!(continent_of(Some("ZZ")), None);
/// assert_eq!(continent_of(None), None);
/// ```
#[must_use]
pub fn continent_of(code: Option<&str>) -> Option<Continent> {
    let upper = code?.to_ascii_uppercase();
    let continent = match upper.as_str() {
        "DZ" | "AO" | "BJ" | "BW" | "BF" | "BI" | "CV" | "CM" | "CF" | "TD" | "KM" | "CG"
        | "CD" | "CI" | "DJ" | "EG" | "GQ" | "ER" | "SZ" | "ET" | "GA" | "GM" | "GH" | "GN"
        | "GW" | "KE" | "LS" | "LR" | "LY" | "MG" | "MW" | "ML" | "MR" | "MU" | "YT" | "MA"
        | "MZ" | "NA" | "NE" | "NG" | "RE" | "RW" | "SH" | "ST" | "SN" | "SC" | "SL" | "SO"
        | "ZA" | "SS" | "SD" | "TZ" | "TG" | "TN" | "UG" | "EH" | "ZM" | "ZW" => {
            Continent::Africa
        }
        "AQ" | "BV" | "GS" | "HM" | "TF" => Continent::Antarctica,
        "AF" | "AM" | "AZ" | "BH" | "BD" | "BT" | "BN" | "KH" | "CN" | "GE" | "HK" | "IN"
        | "ID" | "IR" | "IQ" | "IL" | "JP" | "JO" | "KZ" | "KW" | "KG" | "LA" | "LB" | "MO"
        | "MY" | "MV" | "MN" | "MM" | "NP" | "KP" | "OM" | "PK" | "PS" | "PH" | "QA" | "SA"
        | "SG" | "KR" | "LK" | "SY" | "TW" | "TJ" | "TH" | "TL" | "TR" | "TM" | "AE" | "UZ"
        | "VN" | "YE" | "IO" | "CC" | "CX" => Continent::Asia,
        "AX" | "AL" | "AD" | "AT" | "BY" | "BE" | "BA" | "BG" | "HR" | "CY" | "CZ" | "DK"
        | "EE" | "FO" | "FI" | "FR" | "DE" | "GI" | "GR" | "GG" | "HU" | "IS" | "IE" | "IM"
        | "IT" | "JE" | "XK" | "LV" | "LI" | "LT" | "LU" | "MT" | "MD" | "MC" | "ME" | "NL"
        | "MK" | "NO" | "PL" | "PT" | "RO" | "RU" | "SM" | "RS" | "SK" | "SI" | "ES" | "SJ"
        | "SE" | "CH" | "UA" | "GB" | "VA" => Continent::Europe,
        "AI" | "AG" | "AW" | "BS" | "BB" | "BZ" | "BM" | "BQ" | "VG" | "CA" | "KY" | "CR"
        | "CU" | "CW" | "DM" | "DO" | "SV" | "GL" | "GD" | "GP" | "GT" | "HT" | "HN" | "JM"
        | "MQ" | "MX" | "MS" | "NI" | "PA" | "PR" | "BL" | "KN" | "LC" | "MF" | "PM" | "VC"
        | "SX" | "TT" | "TC" | "US" | "VI" => Continent::NorthAmerica,
        "AS" | "AU" | "CK" | "FJ" | "PF" | "GU" | "KI" | "MH" | "FM" | "NR" | "NC" | "NZ"
        | "NU" | "NF" | "MP" | "PW" | "PG" | "PN" | "WS" | "SB" | "TK" | "TO" | "TV" | "UM"
        | "VU" | "WF" => Continent::Oceania,
        "AR" | "BO" | "BR" | "CL" | "CO" | "EC" | "FK" | "GF" | "GY" | "PY" | "PE" | "SR"
        | "UY" | "VE" => Continent::SouthAmerica,
        _ => return None,
    };
    Some(continent)
}

/// Decide whether two country codes lie on different continents.
///
/// Returns `false` whenever either side cannot be resolved, so missing data
/// never forces a flight.
///
/// # Examples
/// ```
/// use wayfarer_core::is_cross_continental;
///
/// assert!(is_cross_continental(Some("FR"), Some("US")));
/// assert!(!is_cross_continental(Some("FR"), Some("DE")));
/// assert!(!is_cross_continental(Some("FR"), None));
/// ```
#[must_use]
pub fn is_cross_continental(a: Option<&str>, b: Option<&str>) -> bool {
    match (continent_of(a), continent_of(b)) {
        (Some(left), Some(right)) => left != right,
        _ => false,
    }
}
