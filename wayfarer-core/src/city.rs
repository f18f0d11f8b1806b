//! Geocoded cities supplied by the geocoding collaborator.

use geo::Coord;

/// A WGS84 position in decimal degrees.
///
/// Coordinates are not range-checked; the geocoder is expected to hand over
/// valid latitudes and longitudes.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::GeoPoint;
///
/// let point = GeoPoint::new(48.8566, 2.3522);
/// let coord: Coord<f64> = point.into();
/// assert_eq!(coord, Coord { x: 2.3522, y: 48.8566 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

/// A stop on a trip.
///
/// Cities carry no identifier; a city is identified by its position in the
/// trip's ordered city list.
///
/// # Examples
/// ```
/// use wayfarer_core::{City, GeoPoint};
///
/// let lyon = City::new("Lyon", "France", Some("FR"), GeoPoint::new(45.764, 4.8357));
/// assert_eq!(lyon.country_code.as_deref(), Some("FR"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Display name.
    pub name: String,
    /// Country name as reported by the geocoder.
    pub country: String,
    /// ISO 3166-1 alpha-2 code, when the geocoder knows it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub country_code: Option<String>,
    /// Position of the city centre.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: GeoPoint,
}

impl City {
    /// Construct a city record.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        country_code: Option<&str>,
        location: GeoPoint,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            country_code: country_code.map(str::to_owned),
            location,
        }
    }

    /// The country code as a borrowed string.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }
}
