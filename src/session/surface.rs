use ::geo::{coord, Rect};
use log::debug;

use crate::geo::Coordinate;

/// A pin on the map surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Coordinate,
    pub label: String,
}

/// The single owned map surface and its marker collection, behind a
/// narrow interface. Every search's results reach it through
/// generation-stamped application, so a superseded search never
/// touches it.
pub trait MapSurface {
    fn clear_markers(&mut self);
    fn add_marker(&mut self, marker: Marker);
    fn fit_bounds(&mut self, bounds: Rect<f64>);
}

/// Headless surface for tests and the CLI demo.
#[derive(Debug, Default)]
pub struct NullSurface;

impl MapSurface for NullSurface {
    fn clear_markers(&mut self) {}

    fn add_marker(&mut self, marker: Marker) {
        debug!("marker `{}` at {}", marker.label, marker.position);
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        debug!("viewport {:?}", bounds);
    }
}

/// Axis-aligned bounds over a set of positions, `None` when empty.
pub fn bounds_of(positions: impl IntoIterator<Item = Coordinate>) -> Option<Rect<f64>> {
    let mut positions = positions.into_iter();
    let first = positions.next()?;

    let (mut min_lat, mut max_lat) = (first.lat, first.lat);
    let (mut min_lng, mut max_lng) = (first.lng, first.lng);

    for position in positions {
        min_lat = min_lat.min(position.lat);
        max_lat = max_lat.max(position.lat);
        min_lng = min_lng.min(position.lng);
        max_lng = max_lng.max(position.lng);
    }

    Some(Rect::new(
        coord! { x: min_lng, y: min_lat },
        coord! { x: max_lng, y: max_lat },
    ))
}
