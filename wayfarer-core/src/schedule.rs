//! Spreading travel legs across the days of a trip.
//!
//! This is a spacing heuristic rather than a scheduler: when a trip has many
//! legs and few days, several legs share a day and are kept in input order.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::TravelLeg;

/// Days at the start of the first city's stay kept free of travel.
const FIRST_STAY_DAYS: u32 = 2;

/// Travel legs keyed by 0-based trip day. Only days with travel are present.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DayAssignment {
    days: BTreeMap<u32, Vec<TravelLeg>>,
}

impl DayAssignment {
    /// Legs travelled on `day`, in trip order.
    #[must_use]
    pub fn legs_on(&self, day: u32) -> &[TravelLeg] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Days that carry travel, ascending.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.keys().copied()
    }

    /// Iterate over `(day, legs)` pairs, ascending by day.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[TravelLeg])> + '_ {
        self.days.iter().map(|(day, legs)| (*day, legs.as_slice()))
    }

    /// Whether no day carries travel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of legs across all days.
    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    fn push(&mut self, day: u32, leg: TravelLeg) {
        let slot = self.days.entry(day).or_default();
        if !slot.is_empty() {
            debug!("day {day} already holds {} legs; stacking", slot.len());
        }
        slot.push(leg);
    }
}

/// Assign each leg to a day of a `total_days` trip.
///
/// With `days_per_leg = total_days / legs.len()`, the first leg departs on
/// `days_per_leg - 2` (never before day 0) and leg `i` on `i * days_per_leg`.
/// Every index is clamped to `total_days - 2` so nobody travels on the final
/// day. Trips shorter than two days put all travel on day 0.
///
/// # Examples
/// ```
/// use wayfarer_core::{City, GeoPoint, TravelConfig, assign_legs_to_days, plan_legs};
///
/// let paris = City::new("Paris", "France", Some("FR"), GeoPoint::new(48.8566, 2.3522));
/// let lyon = City::new("Lyon", "France", Some("FR"), GeoPoint::new(45.764, 4.8357));
/// let legs = plan_legs(&[paris, lyon], None, &TravelConfig::default());
///
/// let days = assign_legs_to_days(&legs, 7);
/// assert_eq!(days.days().collect::<Vec<_>>(), [5]);
/// ```
#[must_use]
pub fn assign_legs_to_days(legs: &[TravelLeg], total_days: u32) -> DayAssignment {
    let mut assignment = DayAssignment::default();
    if legs.is_empty() {
        return assignment;
    }
    if total_days < 2 {
        warn!("trip of {total_days} days is too short to keep travel off the last day");
    }

    let leg_count = u32::try_from(legs.len()).unwrap_or(u32::MAX);
    let days_per_leg = total_days.checked_div(leg_count).unwrap_or(0);
    let last_travel_day = total_days.saturating_sub(2);

    for (position, leg) in (0_u32..).zip(legs) {
        let day = if position == 0 {
            days_per_leg.saturating_sub(FIRST_STAY_DAYS)
        } else {
            position.saturating_mul(days_per_leg)
        };
        assignment.push(day.min(last_travel_day), leg.clone());
    }
    assignment
}
