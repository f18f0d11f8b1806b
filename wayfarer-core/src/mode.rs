//! Means of transport between two cities.
//!
//! The set of modes is closed; adding one is a deliberate change to every
//! table that matches on it.
//!
//! # Examples
//! ```
//! use wayfarer_core::TravelMode;
//!
//! assert_eq!(TravelMode::Train.as_str(), "train");
//! assert_eq!("bus".parse::<TravelMode>(), Ok(TravelMode::Bus));
//! ```

use thiserror::Error;

/// A travel mode. Declaration order is the enumeration order used for
/// tie-breaks when options are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Commercial flight.
    Flight,
    /// Intercity rail.
    Train,
    /// Private car.
    Car,
    /// Coach or intercity bus.
    Bus,
}

impl TravelMode {
    /// Every mode in enumeration order.
    pub const ALL: [Self; 4] = [Self::Flight, Self::Train, Self::Car, Self::Bus];

    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Car => "car",
            Self::Bus => "bus",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`TravelMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode '{0}'")]
pub struct ParseTravelModeError(pub String);

impl std::str::FromStr for TravelMode {
    type Err = ParseTravelModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flight" => Ok(Self::Flight),
            "train" => Ok(Self::Train),
            "car" => Ok(Self::Car),
            "bus" => Ok(Self::Bus),
            _ => Err(ParseTravelModeError(s.to_owned())),
        }
    }
}
