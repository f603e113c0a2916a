use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Tri-state open/closed resolution for a facility.
///
/// Only a detail lookup that returns structured hours data able to
/// answer "is it open now" produces a definitive state; every failure
/// or absence stays [`OpenStatus::Unknown`], never a guessed boolean.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl OpenStatus {
    pub fn from_open_now(open_now: Option<bool>) -> Self {
        match open_now {
            Some(true) => OpenStatus::Open,
            Some(false) => OpenStatus::Closed,
            None => OpenStatus::Unknown,
        }
    }

    pub fn known_open(&self) -> bool {
        matches!(self, OpenStatus::Open)
    }

    pub fn known_closed(&self) -> bool {
        matches!(self, OpenStatus::Closed)
    }
}

/// A facility returned by the places search, pre-ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub position: Coordinate,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub vicinity: Option<String>,
}

/// Second-pass enrichment for a single candidate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaceDetails {
    pub open: OpenStatus,
    pub phone: Option<String>,
    pub business_status: Option<String>,
}

impl PlaceDetails {
    /// The recovery value for a failed or timed-out lookup.
    pub fn unknown() -> Self {
        PlaceDetails::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub distance: String,
}

/// First leg of the first route returned by the directions service.
/// Created on demand per facility; cleared when the user clears
/// directions or selects a different facility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub distance: String,
    pub duration: String,
    pub steps: Vec<RouteStep>,
}

// --- Wire format (Google Places / Directions web services) ---

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub geometry: Option<Geometry>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
}

impl PlaceResult {
    /// Candidates without geometry cannot be ranked and are dropped here.
    pub fn into_candidate(self) -> Option<Candidate> {
        let location = self.geometry?.location;

        Some(Candidate {
            id: self.place_id,
            name: self.name,
            position: Coordinate {
                lat: location.lat,
                lng: location.lng,
            },
            rating: self.rating,
            user_ratings_total: self.user_ratings_total,
            vicinity: self.vicinity.or(self.formatted_address),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: WireLatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub status: String,
    pub result: Option<DetailsResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResult {
    pub opening_hours: Option<OpeningHours>,
    pub formatted_phone_number: Option<String>,
    pub business_status: Option<String>,
}

impl DetailsResult {
    pub fn into_details(self) -> PlaceDetails {
        PlaceDetails {
            open: OpenStatus::from_open_now(
                self.opening_hours.and_then(|hours| hours.open_now),
            ),
            phone: self.formatted_phone_number,
            business_status: self.business_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpeningHours {
    pub open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<WireRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRoute {
    #[serde(default)]
    pub legs: Vec<WireLeg>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLeg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub steps: Vec<WireStep>,
}

impl WireLeg {
    pub fn into_route(self) -> RouteInfo {
        RouteInfo {
            distance: self.distance.map(|d| d.text).unwrap_or_default(),
            duration: self.duration.map(|d| d.text).unwrap_or_default(),
            steps: self
                .steps
                .into_iter()
                .map(|step| RouteStep {
                    instruction: strip_tags(step.html_instructions.as_deref().unwrap_or_default()),
                    distance: step.distance.map(|d| d.text).unwrap_or_default(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireStep {
    pub html_instructions: Option<String>,
    pub distance: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextValue {
    pub text: String,
}

/// Step instructions arrive as HTML; markers are dropped, text kept.
pub(crate) fn strip_tags(instruction: &str) -> String {
    let mut out = String::with_capacity(instruction.len());
    let mut in_tag = false;

    for character in instruction.chars() {
        match character {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(character),
            _ => {}
        }
    }

    out
}
