//! Travel-logistics engine for multi-city trips.
//!
//! Given an ordered list of geocoded cities, the engine measures the distance
//! of every leg, decides whether a leg is restricted to flights, recommends a
//! travel mode, ranks all modes and spreads the legs across the trip's days.
//!
//! Every operation is a pure function over its arguments. The tunable speeds,
//! overheads and thresholds live in a single [`TravelConfig`] passed by
//! reference, so callers can substitute their own table.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{City, GeoPoint, TravelConfig, TravelMode, plan_legs};
//!
//! let paris = City::new("Paris", "France", Some("FR"), GeoPoint::new(48.8566, 2.3522));
//! let orleans = City::new("Orléans", "France", Some("FR"), GeoPoint::new(47.903, 1.9093));
//!
//! let legs = plan_legs(&[paris, orleans], None, &TravelConfig::default());
//! assert_eq!(legs.len(), 1);
//! assert_eq!(legs[0].distance_km, 111);
//! assert_eq!(legs[0].recommended().map(|o| o.mode), Some(TravelMode::Train));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod city;
pub mod config;
pub mod continent;
pub mod distance;
pub mod estimate;
pub mod legs;
mod mode;
pub mod options;
pub mod recommend;
pub mod restriction;
pub mod schedule;
pub mod trip;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use city::{City, GeoPoint};
pub use config::{DistanceFilters, ModeProfile, ModeTable, TravelConfig, TravelConfigError};
pub use continent::{Continent, continent_of, is_cross_continental};
pub use distance::distance_km;
pub use estimate::{duration_minutes, format_duration};
pub use legs::{TravelLeg, plan_legs};
pub use mode::{ParseTravelModeError, TravelMode};
pub use options::{ModeOption, build_options};
pub use recommend::recommend_mode;
pub use restriction::{Restriction, classify_restriction};
pub use schedule::{DayAssignment, assign_legs_to_days};
pub use trip::{TripPlan, TripRequest, plan_trip};
