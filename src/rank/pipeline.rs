use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::places::{Candidate, OpenStatus, PlaceDetails};
use crate::rank::policy::SearchPolicy;
use crate::rank::score::relevance;
use crate::triage::Urgency;

/// A candidate annotated with distance, score and availability.
///
/// Computed fresh on every search; a new triage result or caller
/// position supersedes the whole list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedFacility {
    pub id: String,
    pub name: String,
    pub position: Coordinate,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub vicinity: Option<String>,
    pub distance_km: f64,
    pub score: f64,
    pub open: OpenStatus,
    pub phone: Option<String>,
    pub business_status: Option<String>,
}

impl RankedFacility {
    fn from_candidate(candidate: Candidate, origin: &Coordinate) -> Self {
        let distance_km = origin.haversine_km(&candidate.position);

        RankedFacility {
            distance_km,
            score: relevance(distance_km, candidate.rating, candidate.user_ratings_total),
            open: OpenStatus::Unknown,
            phone: None,
            business_status: None,
            id: candidate.id,
            name: candidate.name,
            position: candidate.position,
            rating: candidate.rating,
            user_ratings_total: candidate.user_ratings_total,
            vicinity: candidate.vicinity,
        }
    }

    /// Joins a settled detail lookup back onto this facility.
    pub fn apply_details(&mut self, details: PlaceDetails) {
        self.open = details.open;
        self.phone = details.phone;
        self.business_status = details.business_status;
    }
}

/// Phase 1: annotate every candidate with distance and score, keep the
/// strongest `prefilter_cap`, bounding the upcoming per-place lookups.
pub fn shortlist(
    origin: &Coordinate,
    candidates: Vec<Candidate>,
    policy: &SearchPolicy,
) -> Vec<RankedFacility> {
    let mut ranked = candidates
        .into_iter()
        .map(|candidate| RankedFacility::from_candidate(candidate, origin))
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(policy.prefilter_cap);
    ranked
}

/// Availability band of the post-enrichment total order; lower sorts
/// first, ties fall through to score.
///
/// For emergencies a known-open facility outranks any not known open.
/// For every tier known-closed sinks below everything else, so no
/// score can lift a closed facility above an open one.
fn availability_band(urgency: Urgency, status: OpenStatus) -> u8 {
    if urgency.is_emergency() {
        return match status {
            OpenStatus::Open => 0,
            OpenStatus::Unknown => 1,
            OpenStatus::Closed => 2,
        };
    }

    match status {
        OpenStatus::Open | OpenStatus::Unknown => 0,
        OpenStatus::Closed => 1,
    }
}

fn preference(urgency: Urgency, a: &RankedFacility, b: &RankedFacility) -> Ordering {
    availability_band(urgency, a.open)
        .cmp(&availability_band(urgency, b.open))
        .then_with(|| b.score.total_cmp(&a.score))
}

/// Phase 2: availability-aware re-sort once every detail lookup has
/// settled, then the urgency filter and the final bound.
///
/// Emergencies drop facilities definitively closed; unknown status is
/// kept, never guessed either way.
pub fn finalise(
    mut ranked: Vec<RankedFacility>,
    urgency: Urgency,
    policy: &SearchPolicy,
) -> Vec<RankedFacility> {
    ranked.sort_by(|a, b| preference(urgency, a, b));

    if urgency.is_emergency() {
        ranked.retain(|facility| !facility.open.known_closed());
    }

    ranked.truncate(policy.result_cap);
    ranked
}
