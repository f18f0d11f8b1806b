//! Single best travel mode for a leg.

use crate::{TravelConfig, TravelMode, duration_minutes, is_cross_continental};

/// Pick the mode the engine recommends for a leg.
///
/// Rules are checked in order and the first match wins:
///
/// 1. different continents: flight;
/// 2. beyond the flight-only threshold: flight;
/// 3. below the car band limit: car;
/// 4. below the flight-only threshold: train unless the car is faster by at
///    least the time tolerance;
/// 5. otherwise (exactly at the threshold): flight.
///
/// # Examples
/// ```
/// use wayfarer_core::{TravelConfig, TravelMode, recommend_mode};
///
/// let config = TravelConfig::default();
/// assert_eq!(recommend_mode(30, Some("FR"), Some("FR"), &config), TravelMode::Car);
/// assert_eq!(recommend_mode(250, Some("FR"), Some("DE"), &config), TravelMode::Train);
/// assert_eq!(recommend_mode(50, Some("ES"), Some("MA"), &config), TravelMode::Flight);
/// ```
#[must_use]
pub fn recommend_mode(
    distance_km: u32,
    from_code: Option<&str>,
    to_code: Option<&str>,
    config: &TravelConfig,
) -> TravelMode {
    if is_cross_continental(from_code, to_code) {
        return TravelMode::Flight;
    }
    if distance_km > config.flight_only_above_km {
        return TravelMode::Flight;
    }
    if distance_km < config.car_preferred_below_km {
        return TravelMode::Car;
    }
    if distance_km < config.flight_only_above_km {
        let train = duration_minutes(distance_km, TravelMode::Train, config);
        let car = duration_minutes(distance_km, TravelMode::Car, config);
        if train < car.saturating_add(config.time_tolerance_minutes) {
            return TravelMode::Train;
        }
        return TravelMode::Car;
    }
    TravelMode::Flight
}
