//! Travel-time estimates per mode.

use crate::{TravelConfig, TravelMode};

/// Estimate door-to-door minutes for `distance_km` by `mode`.
///
/// The raw travel time is rounded to the nearest minute before the mode's
/// fixed overhead is added.
///
/// # Examples
/// ```
/// use wayfarer_core::{TravelConfig, TravelMode, duration_minutes};
///
/// let config = TravelConfig::default();
/// assert_eq!(duration_minutes(250, TravelMode::Train, &config), 155);
/// assert_eq!(duration_minutes(250, TravelMode::Car, &config), 198);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "speeds are validated positive, so the rounded minute count is non-negative"
)]
pub fn duration_minutes(distance_km: u32, mode: TravelMode, config: &TravelConfig) -> u32 {
    let profile = config.modes.get(mode);
    let travel = (f64::from(distance_km) / profile.speed_kmh * 60.0).round() as u32;
    travel.saturating_add(profile.overhead_minutes)
}

/// Render minutes as `"45m"`, `"2h"` or `"2h 35m"`.
///
/// # Examples
/// ```
/// use wayfarer_core::format_duration;
///
/// assert_eq!(format_duration(45), "45m");
/// assert_eq!(format_duration(120), "2h");
/// assert_eq!(format_duration(155), "2h 35m");
/// ```
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    match (hours, mins) {
        (0, _) => format!("{mins}m"),
        (_, 0) => format!("{hours}h"),
        _ => format!("{hours}h {mins}m"),
    }
}
