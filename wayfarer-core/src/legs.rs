//! Travel legs between consecutive cities of a trip.

use log::debug;

use crate::{
    City, ModeOption, Restriction, TravelConfig, build_options, classify_restriction,
    distance_km, is_cross_continental,
};

/// A directed segment between two consecutive cities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelLeg {
    /// Departure city.
    pub from: City,
    /// Arrival city.
    pub to: City,
    /// Great-circle distance, rounded to the nearest kilometre.
    pub distance_km: u32,
    /// One option per mode, ranked.
    pub options: Vec<ModeOption>,
    /// Flight-only restriction, if any.
    pub restriction: Option<Restriction>,
    /// Whether the ends lie on different continents.
    pub is_cross_continental: bool,
}

impl TravelLeg {
    /// Evaluate the leg from `from` to `to`.
    #[must_use]
    pub fn between(from: &City, to: &City, config: &TravelConfig) -> Self {
        let distance_km = distance_km(from.location, to.location);
        let (from_code, to_code) = (from.code(), to.code());
        Self {
            from: from.clone(),
            to: to.clone(),
            distance_km,
            options: build_options(distance_km, from_code, to_code, config),
            restriction: classify_restriction(distance_km, from_code, to_code, config),
            is_cross_continental: is_cross_continental(from_code, to_code),
        }
    }

    /// The recommended option, if any mode could be recommended.
    #[must_use]
    pub fn recommended(&self) -> Option<&ModeOption> {
        self.options.iter().find(|option| option.is_recommended)
    }
}

/// Plan one leg per consecutive pair of cities.
///
/// When `origin` is given it is visited first, so the first leg runs from the
/// origin to the first city. An empty city list yields no legs, even with an
/// origin.
///
/// # Examples
/// ```
/// use wayfarer_core::{City, GeoPoint, TravelConfig, plan_legs};
///
/// let home = City::new("Paris", "France", Some("FR"), GeoPoint::new(48.8566, 2.3522));
/// let lyon = City::new("Lyon", "France", Some("FR"), GeoPoint::new(45.764, 4.8357));
/// let marseille = City::new("Marseille", "France", Some("FR"), GeoPoint::new(43.2965, 5.3698));
///
/// let legs = plan_legs(&[lyon, marseille], Some(&home), &TravelConfig::default());
/// assert_eq!(legs.len(), 2);
/// assert_eq!(legs[0].from.name, "Paris");
/// assert_eq!(legs[1].to.name, "Marseille");
/// ```
#[must_use]
pub fn plan_legs(cities: &[City], origin: Option<&City>, config: &TravelConfig) -> Vec<TravelLeg> {
    if cities.is_empty() {
        return Vec::new();
    }
    let stops: Vec<&City> = origin.into_iter().chain(cities).collect();
    let legs: Vec<TravelLeg> = stops
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(TravelLeg::between(from, to, config)),
            _ => None,
        })
        .collect();
    debug!(
        "planned {} legs over {} stops ({} restricted)",
        legs.len(),
        stops.len(),
        legs.iter().filter(|leg| leg.restriction.is_some()).count()
    );
    legs
}
