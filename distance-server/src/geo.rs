//! Great-circle distance calculation.
//!
//! Implements the haversine formula over the spherical Earth
//! approximation. Coordinates are decimal degrees; the caller picks
//! the output unit.

use std::fmt;

use crate::domain::Coordinates;

/// Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Error returned when parsing an unrecognized distance unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported unit: {unit:?}")]
pub struct UnsupportedUnit {
    unit: String,
}

/// Distance unit for great-circle calculations.
///
/// Only kilometres and miles are defined; any other unit label fails
/// to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Km,
    Miles,
}

impl Unit {
    /// Parse a unit label.
    ///
    /// Recognizes exactly `"km"` and `"miles"`.
    pub fn parse(s: &str) -> Result<Self, UnsupportedUnit> {
        match s {
            "km" => Ok(Self::Km),
            "miles" => Ok(Self::Miles),
            _ => Err(UnsupportedUnit {
                unit: s.to_string(),
            }),
        }
    }

    /// Returns the unit label used in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Miles => "miles",
        }
    }

    /// Earth radius expressed in this unit.
    fn radius(self) -> f64 {
        match self {
            Self::Km => EARTH_RADIUS_KM,
            Self::Miles => EARTH_RADIUS_MILES,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Great-circle distance between two points, via the haversine formula.
///
/// Inputs are decimal-degree coordinates. No range validation is
/// performed; identical points yield exactly zero and antipodal points
/// fall out of the formula like any other pair.
pub fn haversine(from: Coordinates, to: Coordinates, unit: Unit) -> f64 {
    let lon1 = from.longitude.to_radians();
    let lat1 = from.latitude.to_radians();
    let lon2 = to.longitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    c * unit.radius()
}
