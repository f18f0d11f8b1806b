//! Facade crate for the Wayfarer travel-logistics engine.
//!
//! This crate re-exports the core domain types and planning functions so
//! callers depend on a single crate.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    City, Continent, DayAssignment, DistanceFilters, GeoPoint, ModeOption, ModeProfile,
    ModeTable, ParseTravelModeError, Restriction, TravelConfig, TravelConfigError, TravelLeg,
    TravelMode, TripPlan, TripRequest, assign_legs_to_days, build_options, classify_restriction,
    continent_of, distance_km, duration_minutes, format_duration, is_cross_continental,
    plan_legs, plan_trip, recommend_mode,
};

#[cfg(feature = "test-support")]
pub use wayfarer_core::test_support;
