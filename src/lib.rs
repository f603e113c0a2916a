#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod geo;
pub mod locate;
pub mod places;
pub mod rank;
pub mod session;
pub mod triage;
pub mod util;

use crate::geo::error::GeoError;
use crate::places::error::PlacesError;
use crate::session::error::SessionError;

/// Crate-wide error, folding each submodule's error type
/// in through [`impl_err!`](crate::util::err).
#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Places(PlacesError),
    Session(SessionError),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::sync::Arc;

use crate::locate::Locator;
use crate::rank::RankedFacility;
use crate::session::{NullSurface, Places, TriageSession};
use crate::triage::TriageResult;

/// One-shot convenience over the session machinery: builds the live
/// client from the environment, runs a single search for `triage` and
/// hands back the ranked list.
pub async fn recommend<L>(triage: TriageResult, locator: &L) -> Result<Vec<RankedFacility>>
where
    L: Locator + ?Sized,
{
    let places: Places = Arc::new(places::GoogleMapsClient::from_env()?);

    let mut session = TriageSession::new(places);
    session.supply_triage(triage);

    let mut surface = NullSurface;
    let facilities = session.search(locator, &mut surface).await?.to_vec();

    Ok(facilities)
}
