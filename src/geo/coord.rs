use std::fmt::{Display, Formatter};

use ::geo::Point;
use serde::{Deserialize, Serialize};

use crate::geo::error::GeoError;
use crate::geo::EARTH_RADIUS_KM;

pub type Degree = f64;

/// `Coordinate`
/// The latitude, longitude pair structure, geotags an item with a location.
///
/// ```rust
/// use careroute::geo::Coordinate;
/// let position = Coordinate::from_degree(38.91, -77.02).unwrap();
/// println!("Position: {}", position);
/// ```
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: Degree,
    pub lng: Degree,
}

impl From<(Degree, Degree)> for Coordinate {
    /// Format is: (Lat, Lng)
    fn from((lat, lng): (Degree, Degree)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.lng, coord.lat)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl Coordinate {
    /// Constructs a new `Coordinate` from a given `lat` and `lng`,
    /// validating both are within range.
    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !(lat > -90f64 && lat < 90f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be greater than -90 and less than 90. Given: {}",
                lat
            )));
        }

        if !(lng < 180f64 && lng > -180f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be greater than -180 and less than 180. Given: {}",
                lng
            )));
        }

        Ok(Self { lat, lng })
    }

    /// Great-circle distance to `other` in kilometres, by the haversine
    /// formula over [`EARTH_RADIUS_KM`].
    pub fn haversine_km(&self, other: &Coordinate) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Returns a (`lat`, `lng`) pair.
    pub fn expand(&self) -> (Degree, Degree) {
        (self.lat, self.lng)
    }
}
