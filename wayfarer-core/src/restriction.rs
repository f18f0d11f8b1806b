//! Flight-only restrictions on a leg.

use crate::{TravelConfig, is_cross_continental};

/// Why a leg may only be flown.
///
/// An unrestricted leg carries `None` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Restriction {
    /// The leg is longer than the flight-only threshold.
    #[cfg_attr(feature = "serde", serde(rename = "distance"))]
    DistanceExceeded,
    /// The two ends are on different continents.
    #[cfg_attr(feature = "serde", serde(rename = "cross-continent"))]
    CrossContinental,
}

impl Restriction {
    /// Human-readable reason attached to every ground mode on a restricted leg.
    #[must_use]
    pub fn reason(self, config: &TravelConfig) -> String {
        match self {
            Self::DistanceExceeded => format!(
                "Distance exceeds {} km - flight required",
                config.flight_only_above_km
            ),
            Self::CrossContinental => "Cross-continental travel requires flight".to_owned(),
        }
    }
}

/// Classify a leg. Continental boundaries are checked before distance.
///
/// # Examples
/// ```
/// use wayfarer_core::{Restriction, TravelConfig, classify_restriction};
///
/// let config = TravelConfig::default();
/// assert_eq!(classify_restriction(400, Some("FR"), Some("DE"), &config), None);
/// assert_eq!(
///     classify_restriction(401, Some("FR"), Some("DE"), &config),
///     Some(Restriction::DistanceExceeded)
/// );
/// assert_eq!(
///     classify_restriction(1, Some("ES"), Some("MA"), &config),
///     Some(Restriction::CrossContinental)
/// );
/// ```
#[must_use]
pub fn classify_restriction(
    distance_km: u32,
    from_code: Option<&str>,
    to_code: Option<&str>,
    config: &TravelConfig,
) -> Option<Restriction> {
    if is_cross_continental(from_code, to_code) {
        return Some(Restriction::CrossContinental);
    }
    if distance_km > config.flight_only_above_km {
        return Some(Restriction::DistanceExceeded);
    }
    None
}
