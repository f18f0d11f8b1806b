//! Tunable speeds, overheads and distance thresholds.
//!
//! All business assumptions used by the estimator, the classifier, the
//! recommender and the options builder live in [`TravelConfig`]. The
//! [`Default`] implementation reproduces the production table; tests and
//! callers may substitute their own and check it with
//! [`TravelConfig::validate`].

use thiserror::Error;

use crate::TravelMode;

/// Cruising speed and fixed overhead for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeProfile {
    /// Average door-to-door speed in km/h.
    pub speed_kmh: f64,
    /// Fixed time for boarding, security or parking, in minutes.
    pub overhead_minutes: u32,
}

impl ModeProfile {
    /// Construct a profile.
    #[must_use]
    pub const fn new(speed_kmh: f64, overhead_minutes: u32) -> Self {
        Self {
            speed_kmh,
            overhead_minutes,
        }
    }
}

/// One [`ModeProfile`] per [`TravelMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModeTable {
    /// Flights absorb two hours of check-in, security and taxiing.
    pub flight: ModeProfile,
    /// Trains.
    pub train: ModeProfile,
    /// Cars.
    pub car: ModeProfile,
    /// Buses.
    pub bus: ModeProfile,
}

impl ModeTable {
    /// Look up the profile for `mode`.
    #[must_use]
    pub const fn get(&self, mode: TravelMode) -> &ModeProfile {
        match mode {
            TravelMode::Flight => &self.flight,
            TravelMode::Train => &self.train,
            TravelMode::Car => &self.car,
            TravelMode::Bus => &self.bus,
        }
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            flight: ModeProfile::new(800.0, 120),
            train: ModeProfile::new(120.0, 30),
            car: ModeProfile::new(80.0, 10),
            bus: ModeProfile::new(60.0, 15),
        }
    }
}

/// Distance limits that make a mode unsuitable on an unrestricted leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistanceFilters {
    /// Flights are not offered below this distance.
    pub min_flight_km: u32,
    /// Cars are not offered above this distance.
    pub max_car_km: u32,
    /// Buses are not offered above this distance.
    pub max_bus_km: u32,
}

impl Default for DistanceFilters {
    fn default() -> Self {
        Self {
            min_flight_km: 100,
            max_car_km: 1500,
            max_bus_km: 1500,
        }
    }
}

/// Complete configuration for the travel-logistics engine.
///
/// # Examples
/// ```
/// use wayfarer_core::{TravelConfig, TravelMode};
///
/// let config = TravelConfig::default();
/// assert_eq!(config.flight_only_above_km, 400);
/// assert_eq!(config.modes.get(TravelMode::Flight).overhead_minutes, 120);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TravelConfig {
    /// Speed and overhead per mode.
    pub modes: ModeTable,
    /// Legs strictly longer than this are flight-only.
    pub flight_only_above_km: u32,
    /// Legs strictly shorter than this are recommended by car.
    pub car_preferred_below_km: u32,
    /// Train wins a medium leg unless the car is faster by at least this
    /// many minutes.
    pub time_tolerance_minutes: u32,
    /// Per-mode suitability limits.
    pub filters: DistanceFilters,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            modes: ModeTable::default(),
            flight_only_above_km: 400,
            car_preferred_below_km: 100,
            time_tolerance_minutes: 30,
            filters: DistanceFilters::default(),
        }
    }
}

/// Errors returned by [`TravelConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TravelConfigError {
    /// A mode's speed was zero, negative or not finite.
    #[error("speed for {mode} must be a positive finite number (got {speed})")]
    InvalidSpeed {
        /// Mode carrying the bad speed.
        mode: TravelMode,
        /// Offending value.
        speed: f64,
    },
    /// A lower threshold exceeded the flight-only threshold.
    #[error("{field} ({value} km) must not exceed flight_only_above_km ({limit} km)")]
    ThresholdOrder {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: u32,
        /// The flight-only threshold.
        limit: u32,
    },
    /// The car filter cut in before the flight-only threshold, so a leg
    /// could be recommended a car it may not take.
    #[error("max_car_km ({max_car_km} km) must be at least flight_only_above_km ({limit} km)")]
    CarRangeTooShort {
        /// Configured car filter.
        max_car_km: u32,
        /// The flight-only threshold.
        limit: u32,
    },
}

impl TravelConfig {
    /// Check that every speed is usable and that thresholds are ordered.
    ///
    /// # Errors
    /// Returns [`TravelConfigError::InvalidSpeed`] for a non-positive or
    /// non-finite speed, [`TravelConfigError::ThresholdOrder`] when a
    /// short-distance threshold lies beyond the flight-only threshold, and
    /// [`TravelConfigError::CarRangeTooShort`] when the car filter excludes
    /// legs below that threshold.
    pub fn validate(&self) -> Result<(), TravelConfigError> {
        for mode in TravelMode::ALL {
            let speed = self.modes.get(mode).speed_kmh;
            if !speed.is_finite() || speed <= 0.0 {
                return Err(TravelConfigError::InvalidSpeed { mode, speed });
            }
        }
        let limit = self.flight_only_above_km;
        for (field, value) in [
            ("min_flight_km", self.filters.min_flight_km),
            ("car_preferred_below_km", self.car_preferred_below_km),
        ] {
            if value > limit {
                return Err(TravelConfigError::ThresholdOrder {
                    field,
                    value,
                    limit,
                });
            }
        }
        if self.filters.max_car_km < limit {
            return Err(TravelConfigError::CarRangeTooShort {
                max_car_km: self.filters.max_car_km,
                limit,
            });
        }
        Ok(())
    }
}
