use std::collections::HashMap;
use std::iter::once;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::task::JoinSet;
use tokio::time::timeout;

#[cfg(feature = "tracing")]
use tracing::Level;

use crate::geo::Coordinate;
use crate::locate::{locate, LocateConfig, Locator};
use crate::places::{PlaceDetails, PlacesApi, RouteInfo};
use crate::rank::{finalise, shortlist, RankedFacility, SearchPolicy};
use crate::triage::TriageResult;

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod state;
#[doc(hidden)]
pub mod surface;

#[doc(inline)]
pub use state::ScreenState;
#[doc(inline)]
pub use surface::{bounds_of, MapSurface, Marker, NullSurface};

use error::SessionError;

pub type Places = Arc<dyn PlacesApi>;

/// Per-place lookups are independent; one stalling must not hold the
/// whole join hostage.
const DETAIL_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// One facility-screen session: owns the screen state, the current
/// ranked list, any shown route, and the search generation counter.
///
/// Searches run in two halves so an event loop may spawn them:
/// [`TriageSession::begin_search`] stamps a [`PendingSearch`] with the
/// next generation, [`PendingSearch::run`] performs every external
/// call, and [`TriageSession::apply`] joins the outcome back in -
/// discarding it when a newer search has the stamp.
pub struct TriageSession {
    places: Places,
    locate: LocateConfig,
    state: ScreenState,
    generation: u64,
    triage: Option<TriageResult>,
    origin: Option<Coordinate>,
    facilities: Vec<RankedFacility>,
    route: Option<RouteInfo>,
}

impl TriageSession {
    pub fn new(places: Places) -> Self {
        Self::with_locate(places, LocateConfig::default())
    }

    pub fn with_locate(places: Places, locate: LocateConfig) -> Self {
        TriageSession {
            places,
            locate,
            state: ScreenState::default(),
            generation: 0,
            triage: None,
            origin: None,
            facilities: Vec::new(),
            route: None,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn facilities(&self) -> &[RankedFacility] {
        &self.facilities
    }

    pub fn route(&self) -> Option<&RouteInfo> {
        self.route.as_ref()
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.origin
    }

    /// Receives the triage result from upstream navigation, leaving
    /// the assessment prompt.
    pub fn supply_triage(&mut self, triage: TriageResult) {
        self.triage = Some(triage);
        self.state = ScreenState::LocatingServices;
    }

    /// Stamps a new search with the next generation and enters the
    /// searching state; any search still in flight becomes stale from
    /// this point.
    pub fn begin_search(&mut self) -> Result<PendingSearch, SessionError> {
        let triage = self.triage.clone().ok_or(SessionError::MissingTriage)?;

        self.generation += 1;
        self.state = ScreenState::Searching;

        Ok(PendingSearch {
            generation: self.generation,
            triage,
            places: Arc::clone(&self.places),
            locate: self.locate,
        })
    }

    /// Joins a settled search back into the session and redraws the
    /// surface. A superseded outcome is discarded untouched; the
    /// session reports the discard with `None`.
    pub fn apply(
        &mut self,
        outcome: SearchOutcome,
        surface: &mut dyn MapSurface,
    ) -> Option<Result<&[RankedFacility], SessionError>> {
        if outcome.generation != self.generation {
            debug!(
                "discarding superseded search (generation {} behind {})",
                outcome.generation, self.generation
            );
            return None;
        }

        Some(self.join(outcome.result, surface))
    }

    fn join(
        &mut self,
        result: Result<SearchResults, SessionError>,
        surface: &mut dyn MapSurface,
    ) -> Result<&[RankedFacility], SessionError> {
        match result {
            Ok(results) => {
                self.origin = Some(results.origin);
                self.facilities = results.facilities;
                self.route = None;
                self.state = ScreenState::Ready;

                redraw(surface, results.origin, &self.facilities);
                Ok(&self.facilities)
            }
            Err(err) => {
                self.facilities.clear();
                self.route = None;
                self.state = ScreenState::Failed(err.user_message().to_string());

                surface.clear_markers();
                Err(err)
            }
        }
    }

    /// Runs a full search in place: stamp, execute, join. Event loops
    /// that interleave searches should drive the halves themselves.
    pub async fn search<L>(
        &mut self,
        locator: &L,
        surface: &mut dyn MapSurface,
    ) -> Result<&[RankedFacility], SessionError>
    where
        L: Locator + ?Sized,
    {
        let pending = self.begin_search()?;
        let outcome = pending.run(locator).await;

        // The generation cannot have moved while we held the session.
        self.join(outcome.result, surface)
    }

    /// Requests driving directions to a ranked facility. Failure is
    /// silent: prior directions state stays untouched and the caller
    /// sees `None`.
    pub async fn show_directions(&mut self, facility_id: &str) -> Option<&RouteInfo> {
        let origin = self.origin?;
        let facility = self
            .facilities
            .iter()
            .find(|facility| facility.id == facility_id)?;

        match self.places.directions(origin, facility.position).await {
            Ok(route) => {
                self.route = Some(route);
                self.state = ScreenState::ShowingDirections;
                self.route.as_ref()
            }
            Err(err) => {
                debug!("directions to {facility_id} failed: {err:?}");
                None
            }
        }
    }

    /// Drops the shown route and returns to the ranked list without
    /// re-running the search.
    pub fn clear_directions(&mut self) {
        self.route = None;

        if matches!(self.state, ScreenState::ShowingDirections) {
            self.state = ScreenState::Ready;
        }
    }
}

/// A stamped, not-yet-run search. Owns everything the external calls
/// need so it can run detached from the session.
pub struct PendingSearch {
    generation: u64,
    triage: TriageResult,
    places: Places,
    locate: LocateConfig,
}

/// What a settled search hands back for joining, stamped with the
/// generation it was begun under.
pub struct SearchOutcome {
    generation: u64,
    result: Result<SearchResults, SessionError>,
}

pub struct SearchResults {
    pub origin: Coordinate,
    pub facilities: Vec<RankedFacility>,
}

impl PendingSearch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Performs the whole search: locate, candidate search with the
    /// nearby fallback, shortlist, joined enrichment fan-out, final
    /// ranking. Infallible in the async sense; errors ride inside the
    /// outcome.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip_all))]
    pub async fn run<L>(self, locator: &L) -> SearchOutcome
    where
        L: Locator + ?Sized,
    {
        let result = self.execute(locator).await;

        SearchOutcome {
            generation: self.generation,
            result,
        }
    }

    async fn execute<L>(&self, locator: &L) -> Result<SearchResults, SessionError>
    where
        L: Locator + ?Sized,
    {
        let policy = SearchPolicy::for_urgency(self.triage.urgency);
        let origin = locate(locator, &self.locate).await;

        let query = policy.search_query(&self.triage);
        info!(
            "searching `{query}` within {}m of {origin} ({})",
            policy.radius_m, self.triage.urgency
        );

        let mut candidates = self
            .places
            .text_search(&query, origin, policy.radius_m)
            .await?;

        if candidates.is_empty() {
            debug!("text search empty, falling back to nearby hospitals");
            candidates = self.places.nearby_search(origin, policy.radius_m).await?;
        }

        if candidates.is_empty() {
            return Err(SessionError::NoFacilitiesFound);
        }

        let mut shortlisted = shortlist(&origin, candidates, &policy);
        let mut details = self.enrich(&shortlisted).await;

        for facility in &mut shortlisted {
            if let Some(details) = details.remove(&facility.id) {
                facility.apply_details(details);
            }
        }

        Ok(SearchResults {
            origin,
            facilities: finalise(shortlisted, self.triage.urgency, &policy),
        })
    }

    /// Fans the per-place detail lookups out concurrently and joins
    /// them all, keyed by candidate identity. A failed or timed-out
    /// lookup recovers locally as an unknown open-status; partial
    /// results never leave this join.
    async fn enrich(&self, shortlisted: &[RankedFacility]) -> HashMap<String, PlaceDetails> {
        let mut lookups = JoinSet::new();

        for facility in shortlisted {
            let places = Arc::clone(&self.places);
            let id = facility.id.clone();

            lookups.spawn(async move {
                let details = match timeout(DETAIL_LOOKUP_TIMEOUT, places.place_details(&id)).await
                {
                    Ok(Ok(details)) => details,
                    Ok(Err(err)) => {
                        debug!("detail lookup for {id} failed: {err:?}");
                        PlaceDetails::unknown()
                    }
                    Err(_) => {
                        debug!("detail lookup for {id} timed out");
                        PlaceDetails::unknown()
                    }
                };

                (id, details)
            });
        }

        let mut by_id = HashMap::with_capacity(shortlisted.len());
        while let Some(settled) = lookups.join_next().await {
            match settled {
                Ok((id, details)) => {
                    by_id.insert(id, details);
                }
                Err(err) => debug!("detail lookup task aborted: {err}"),
            }
        }

        by_id
    }
}

fn redraw(surface: &mut dyn MapSurface, origin: Coordinate, facilities: &[RankedFacility]) {
    surface.clear_markers();
    surface.add_marker(Marker {
        position: origin,
        label: "Your location".to_string(),
    });

    for facility in facilities {
        surface.add_marker(Marker {
            position: facility.position,
            label: facility.name.clone(),
        });
    }

    let positions = once(origin).chain(facilities.iter().map(|facility| facility.position));
    if let Some(bounds) = bounds_of(positions) {
        surface.fit_bounds(bounds);
    }
}
