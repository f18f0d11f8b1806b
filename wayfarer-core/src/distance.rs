//! Great-circle distance between two points.

use crate::GeoPoint;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, rounded to the nearest kilometre.
///
/// The result is symmetric and zero for identical points. Out-of-range
/// coordinates are not rejected.
///
/// # Examples
/// ```
/// use wayfarer_core::{GeoPoint, distance_km};
///
/// let paris = GeoPoint::new(48.8566, 2.3522);
/// let london = GeoPoint::new(51.5074, -0.1278);
/// assert_eq!(distance_km(paris, london), 344);
/// assert_eq!(distance_km(paris, paris), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "haversine needs floating-point trigonometry; the rounded result is non-negative and below half the Earth's circumference"
)]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> u32 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let half_chord = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `h` just past 1 for near-antipodal points.
    let h = half_chord.clamp(0.0, 1.0);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    (EARTH_RADIUS_KM * central_angle).round() as u32
}
