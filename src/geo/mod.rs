/// Mean Earth radius used by the haversine distance, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod error;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use coord::Coordinate;
