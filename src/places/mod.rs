use async_trait::async_trait;

use crate::geo::Coordinate;

#[doc(hidden)]
pub mod client;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod model;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use client::GoogleMapsClient;
#[doc(inline)]
pub use model::{Candidate, OpenStatus, PlaceDetails, RouteInfo, RouteStep};

use error::PlacesError;

/// Capability set required of the external mapping service: candidate
/// search, per-place detail lookup, and driving-route computation.
/// The service's own search and routing algorithms are opaque; this
/// crate only constructs requests and post-processes responses.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Free-text place search around `center` within `radius_m` metres.
    async fn text_search(
        &self,
        query: &str,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<Candidate>, PlacesError>;

    /// Keyword-free fallback: every hospital-typed place around `center`.
    async fn nearby_search(
        &self,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<Candidate>, PlacesError>;

    /// Detail lookup for a single candidate, resolving its open-status.
    async fn place_details(&self, id: &str) -> Result<PlaceDetails, PlacesError>;

    /// Driving route from `origin` to `destination`, first route's
    /// first leg only.
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteInfo, PlacesError>;
}
