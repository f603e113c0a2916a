use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::geo::{Coordinate, EARTH_RADIUS_KM};

#[test]
fn distance_is_symmetric() {
    let a = Coordinate::from_degree(38.91261500917026, -77.02343850496823).unwrap();
    let b = Coordinate::from_degree(38.91772552535467, -77.03456230592386).unwrap();

    assert_relative_eq!(a.haversine_km(&b), b.haversine_km(&a));
}

#[test]
fn distance_to_self_is_zero() {
    let a = Coordinate::from_degree(-33.883572, 151.180025).unwrap();
    assert_relative_eq!(a.haversine_km(&a), 0.0);
}

#[test]
fn one_degree_along_the_equator() {
    let origin = Coordinate::from_degree(0.0, 0.0).unwrap();
    let east = Coordinate::from_degree(0.0, 1.0).unwrap();

    // One degree of arc at the surface.
    let expected = EARTH_RADIUS_KM * PI / 180.0;
    assert_relative_eq!(origin.haversine_km(&east), expected, epsilon = 1e-9);
}

#[test]
fn one_degree_along_a_meridian_matches_the_equator() {
    let origin = Coordinate::from_degree(0.0, 0.0).unwrap();
    let east = Coordinate::from_degree(0.0, 1.0).unwrap();
    let north = Coordinate::from_degree(1.0, 0.0).unwrap();

    assert_relative_eq!(
        origin.haversine_km(&north),
        origin.haversine_km(&east),
        epsilon = 1e-9
    );
}

#[test]
fn rejects_out_of_range_latitude() {
    assert!(Coordinate::from_degree(91.0, 0.0).is_err());
    assert!(Coordinate::from_degree(-90.5, 0.0).is_err());
}

#[test]
fn rejects_out_of_range_longitude() {
    assert!(Coordinate::from_degree(0.0, 180.5).is_err());
    assert!(Coordinate::from_degree(0.0, -181.0).is_err());
}
