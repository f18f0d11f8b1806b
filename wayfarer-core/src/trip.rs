//! End-to-end trip planning: legs plus their day assignment.

use crate::{City, DayAssignment, TravelConfig, TravelLeg, assign_legs_to_days, plan_legs};

/// Cities to visit, where the traveller starts, and how long the trip lasts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRequest {
    /// Cities in visiting order.
    pub cities: Vec<City>,
    /// Home city the trip departs from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: Option<City>,
    /// Trip length in days.
    pub total_days: u32,
}

/// Planned legs and the days they fall on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    /// Legs in travel order.
    pub legs: Vec<TravelLeg>,
    /// The same legs keyed by departure day.
    pub days: DayAssignment,
}

/// Plan the legs of `request` and place them on the trip's days.
///
/// # Examples
/// ```
/// use wayfarer_core::{City, GeoPoint, TravelConfig, TripRequest, plan_trip};
///
/// let request = TripRequest {
///     cities: vec![
///         City::new("Paris", "France", Some("FR"), GeoPoint::new(48.8566, 2.3522)),
///         City::new("London", "United Kingdom", Some("GB"), GeoPoint::new(51.5074, -0.1278)),
///     ],
///     origin: None,
///     total_days: 5,
/// };
/// let plan = plan_trip(&request, &TravelConfig::default());
/// assert_eq!(plan.legs.len(), 1);
/// assert_eq!(plan.days.legs_on(3).len(), 1);
/// ```
#[must_use]
pub fn plan_trip(request: &TripRequest, config: &TravelConfig) -> TripPlan {
    let legs = plan_legs(&request.cities, request.origin.as_ref(), config);
    let days = assign_legs_to_days(&legs, request.total_days);
    TripPlan { legs, days }
}
