use crate::impl_err;

#[derive(Debug)]
pub enum GeoError {
    InvalidCoordinate(String),
}

impl_err!(GeoError, Geo);
