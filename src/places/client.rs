use std::env;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

#[cfg(feature = "tracing")]
use tracing::Level;

use crate::geo::Coordinate;
use crate::places::error::PlacesError;
use crate::places::model::{
    Candidate, DetailsResponse, DetailsResult, DirectionsResponse, PlaceDetails, RouteInfo,
    SearchResponse,
};
use crate::places::PlacesApi;

const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const NEARBY_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// The place-detail fields requested; the minimum that can answer
/// open-status, phone and operating state.
const DETAIL_FIELDS: &str = "opening_hours,formatted_phone_number,business_status";

pub const CREDENTIAL_VAR: &str = "GOOGLE_MAPS_API_KEY";

fn get_env(key: &str) -> Result<String, PlacesError> {
    env::var(key).map_err(|_| PlacesError::MissingCredential(key.to_string()))
}

/// Client for the Google Places and Directions web services.
///
/// Holds a pooled [`reqwest::Client`]; cheap to clone.
#[derive(Clone, Debug)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    key: String,
}

impl GoogleMapsClient {
    pub fn new(key: impl Into<String>) -> Self {
        GoogleMapsClient {
            http: reqwest::Client::new(),
            key: key.into(),
        }
    }

    /// Reads the service credential from [`CREDENTIAL_VAR`]. Absence is
    /// a configuration error surfaced before any search is attempted.
    pub fn from_env() -> Result<Self, PlacesError> {
        Ok(Self::new(get_env(CREDENTIAL_VAR)?))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlacesError> {
        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    fn location_param(center: Coordinate) -> String {
        format!("{},{}", center.lat, center.lng)
    }
}

/// Maps the service's status word: `OK` and `ZERO_RESULTS` are valid
/// answers, everything else is an upstream failure.
fn check_status(status: &str, message: Option<String>) -> Result<(), PlacesError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        _ => Err(PlacesError::Status {
            status: status.to_string(),
            message,
        }),
    }
}

#[async_trait]
impl PlacesApi for GoogleMapsClient {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self)))]
    async fn text_search(
        &self,
        query: &str,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<Candidate>, PlacesError> {
        let response: SearchResponse = self
            .get_json(
                TEXT_SEARCH_URL,
                &[
                    ("query", query.to_string()),
                    ("location", Self::location_param(center)),
                    ("radius", radius_m.to_string()),
                ],
            )
            .await?;

        check_status(&response.status, response.error_message)?;
        debug!("text search `{query}` returned {} places", response.results.len());

        Ok(response
            .results
            .into_iter()
            .filter_map(|place| place.into_candidate())
            .collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self)))]
    async fn nearby_search(
        &self,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<Candidate>, PlacesError> {
        let response: SearchResponse = self
            .get_json(
                NEARBY_SEARCH_URL,
                &[
                    ("location", Self::location_param(center)),
                    ("radius", radius_m.to_string()),
                    ("type", "hospital".to_string()),
                ],
            )
            .await?;

        check_status(&response.status, response.error_message)?;
        debug!("nearby search returned {} places", response.results.len());

        Ok(response
            .results
            .into_iter()
            .filter_map(|place| place.into_candidate())
            .collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self)))]
    async fn place_details(&self, id: &str) -> Result<PlaceDetails, PlacesError> {
        let response: DetailsResponse = self
            .get_json(
                DETAILS_URL,
                &[
                    ("place_id", id.to_string()),
                    ("fields", DETAIL_FIELDS.to_string()),
                ],
            )
            .await?;

        check_status(&response.status, None)?;

        Ok(response
            .result
            .map(DetailsResult::into_details)
            .unwrap_or_else(PlaceDetails::unknown))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self)))]
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteInfo, PlacesError> {
        let response: DirectionsResponse = self
            .get_json(
                DIRECTIONS_URL,
                &[
                    ("origin", Self::location_param(origin)),
                    ("destination", Self::location_param(destination)),
                    ("mode", "driving".to_string()),
                ],
            )
            .await?;

        check_status(&response.status, None)?;

        response
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .map(|leg| leg.into_route())
            .ok_or(PlacesError::NoRoute)
    }
}
