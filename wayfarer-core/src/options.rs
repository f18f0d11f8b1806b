//! Ranked, annotated options for every travel mode on a leg.

use crate::{
    DistanceFilters, Restriction, TravelConfig, TravelMode, classify_restriction,
    duration_minutes, recommend_mode,
};

/// One travel mode evaluated for a specific leg.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeOption {
    /// Mode being described.
    pub mode: TravelMode,
    /// Estimated door-to-door time including overhead.
    pub duration_minutes: u32,
    /// Whether this is the engine's pick for the leg.
    pub is_recommended: bool,
    /// Whether the mode may be chosen at all.
    pub is_allowed: bool,
    /// Why the mode is not allowed.
    pub restriction_reason: Option<String>,
}

/// Build one option per [`TravelMode`] for a leg.
///
/// Restricted legs list the modes in enumeration order with only the flight
/// allowed and recommended. Unrestricted legs apply the per-mode distance
/// filters and are ordered recommended first, then allowed, then by ascending
/// duration, with enumeration order breaking ties.
///
/// # Examples
/// ```
/// use wayfarer_core::{TravelConfig, TravelMode, build_options};
///
/// let options = build_options(30, Some("FR"), Some("FR"), &TravelConfig::default());
/// let modes: Vec<_> = options.iter().map(|o| o.mode).collect();
/// assert_eq!(
///     modes,
///     [TravelMode::Car, TravelMode::Train, TravelMode::Bus, TravelMode::Flight]
/// );
/// assert!(!options[3].is_allowed);
/// ```
#[must_use]
pub fn build_options(
    distance_km: u32,
    from_code: Option<&str>,
    to_code: Option<&str>,
    config: &TravelConfig,
) -> Vec<ModeOption> {
    if let Some(restriction) = classify_restriction(distance_km, from_code, to_code, config) {
        return flight_only(distance_km, restriction, config);
    }

    let recommended = recommend_mode(distance_km, from_code, to_code, config);
    let mut options: Vec<ModeOption> = TravelMode::ALL
        .into_iter()
        .map(|mode| {
            let restriction_reason = filter_reason(distance_km, mode, &config.filters);
            let is_allowed = restriction_reason.is_none();
            ModeOption {
                mode,
                duration_minutes: duration_minutes(distance_km, mode, config),
                is_recommended: is_allowed && mode == recommended,
                is_allowed,
                restriction_reason,
            }
        })
        .collect();
    options.sort_by_key(|option| {
        (
            !option.is_recommended,
            !option.is_allowed,
            option.duration_minutes,
            option.mode,
        )
    });
    options
}

fn flight_only(distance_km: u32, restriction: Restriction, config: &TravelConfig) -> Vec<ModeOption> {
    let reason = restriction.reason(config);
    TravelMode::ALL
        .into_iter()
        .map(|mode| {
            let is_flight = mode == TravelMode::Flight;
            ModeOption {
                mode,
                duration_minutes: duration_minutes(distance_km, mode, config),
                is_recommended: is_flight,
                is_allowed: is_flight,
                restriction_reason: (!is_flight).then(|| reason.clone()),
            }
        })
        .collect()
}

fn filter_reason(distance_km: u32, mode: TravelMode, filters: &DistanceFilters) -> Option<String> {
    match mode {
        TravelMode::Flight if distance_km < filters.min_flight_km => Some(format!(
            "Too short for flight (< {} km)",
            filters.min_flight_km
        )),
        TravelMode::Car if distance_km > filters.max_car_km => {
            Some(format!("Too long for car (> {} km)", filters.max_car_km))
        }
        TravelMode::Bus if distance_km > filters.max_bus_km => {
            Some(format!("Too long for bus (> {} km)", filters.max_bus_km))
        }
        _ => None,
    }
}
