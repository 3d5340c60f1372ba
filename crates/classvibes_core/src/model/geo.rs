//! Geographic records used for proximity ranking.
//!
//! # Invariants
//! - Coordinates are WGS84 decimal degrees and always finite and in range.
//! - Ranked entities carry a distance computed for one query only.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Latitude/longitude pair in decimal degrees.
///
/// Only constructible through [`Coordinate::new`]; deserialization runs the
/// same checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Builds a coordinate after range checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl Display for CoordinateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LatitudeOutOfRange(value) => {
                write!(f, "latitude {value} is outside [-90, 90]")
            }
            Self::LongitudeOutOfRange(value) => {
                write!(f, "longitude {value} is outside [-180, 180]")
            }
        }
    }
}

impl Error for CoordinateError {}

/// Input entity for ranking: anything with an id, a name and a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
}

/// Ranked entity with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedEntity {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub distance_km: f64,
}

/// Row shape returned by the remote course repository.
///
/// Rows without a stored position cannot take part in ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRow {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub professor_name: Option<String>,
    pub coordinate: Option<Coordinate>,
}

impl CourseRow {
    /// Projects this row into a ranking input when it has a position.
    pub fn placed(&self) -> Option<PlacedEntity> {
        self.coordinate.map(|coordinate| PlacedEntity {
            id: self.id.clone(),
            name: self.name.clone(),
            coordinate,
        })
    }
}
