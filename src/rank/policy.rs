use itertools::Itertools;

use crate::triage::{TriageResult, Urgency};

/// The constant search term appended to every composed query.
const HOSPITAL_TERM: &str = "hospital";

/// Catch-all query should the composed one come out empty.
pub const FALLBACK_QUERY: &str = "hospital near me";

/// Urgency-driven search parameters.
///
/// The pre-filter cap bounds how many candidates incur the per-place
/// detail lookup, which is rate-limited upstream; it always admits at
/// least as many candidates as the final result cap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchPolicy {
    /// Candidate search radius in metres.
    pub radius_m: u32,
    /// Final list bound after availability filtering.
    pub result_cap: usize,
    /// Candidates kept ahead of the open/closed enrichment step.
    pub prefilter_cap: usize,
}

impl SearchPolicy {
    pub fn for_urgency(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Emergency => SearchPolicy {
                radius_m: 20_000,
                result_cap: 3,
                prefilter_cap: 6,
            },
            Urgency::Urgent => SearchPolicy {
                radius_m: 15_000,
                result_cap: 5,
                prefilter_cap: 8,
            },
            Urgency::Routine => SearchPolicy {
                radius_m: 10_000,
                result_cap: 5,
                prefilter_cap: 8,
            },
        }
    }

    /// Composes the free-text search query: triage keywords, then the
    /// recommended department, then [`HOSPITAL_TERM`], skipping empty
    /// terms.
    pub fn search_query(&self, triage: &TriageResult) -> String {
        let query = triage
            .search_keywords
            .iter()
            .map(String::as_str)
            .chain([triage.department.as_str(), HOSPITAL_TERM])
            .filter(|term| !term.is_empty())
            .join(" ");

        if query.is_empty() {
            return FALLBACK_QUERY.to_string();
        }

        query
    }
}
