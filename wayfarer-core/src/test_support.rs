//! Geocoded city fixtures shared by unit, behaviour and property tests.
//!
//! Coordinates are city-centre values as returned by the Open-Meteo
//! geocoder.

use crate::{City, GeoPoint};

/// Build a city from raw parts.
#[must_use]
pub fn city(name: &str, country: &str, code: Option<&str>, latitude: f64, longitude: f64) -> City {
    City::new(name, country, code, GeoPoint::new(latitude, longitude))
}

/// Paris, France.
#[must_use]
pub fn paris() -> City {
    city("Paris", "France", Some("FR"), 48.8566, 2.3522)
}

/// Versailles, France: 18 km from Paris.
#[must_use]
pub fn versailles() -> City {
    city("Versailles", "France", Some("FR"), 48.8049, 2.1204)
}

/// Orléans, France: 111 km from Paris.
#[must_use]
pub fn orleans() -> City {
    city("Orléans", "France", Some("FR"), 47.903, 1.9093)
}

/// Lyon, France: 391 km from Paris.
#[must_use]
pub fn lyon() -> City {
    city("Lyon", "France", Some("FR"), 45.764, 4.8357)
}

/// Marseille, France: 660 km from Paris.
#[must_use]
pub fn marseille() -> City {
    city("Marseille", "France", Some("FR"), 43.2965, 5.3698)
}

/// London, United Kingdom: 344 km from Paris.
#[must_use]
pub fn london() -> City {
    city("London", "United Kingdom", Some("GB"), 51.5074, -0.1278)
}

/// New York, United States.
#[must_use]
pub fn new_york() -> City {
    city("New York", "United States", Some("US"), 40.7128, -74.006)
}

/// Tarifa, Spain: 35 km across the strait from Tangier.
#[must_use]
pub fn tarifa() -> City {
    city("Tarifa", "Spain", Some("ES"), 36.0143, -5.6044)
}

/// Tangier, Morocco.
#[must_use]
pub fn tangier() -> City {
    city("Tangier", "Morocco", Some("MA"), 35.7595, -5.834)
}

/// Look up a fixture city by name, ignoring case.
#[must_use]
pub fn named(name: &str) -> Option<City> {
    [
        paris(),
        versailles(),
        orleans(),
        lyon(),
        marseille(),
        london(),
        new_york(),
        tarifa(),
        tangier(),
    ]
    .into_iter()
    .find(|city| city.name.eq_ignore_ascii_case(name))
}
