use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::geo::Coordinate;

#[cfg(test)]
mod test;

/// The "unknown-location default": where searches centre when the
/// caller's position cannot be resolved. Overridable via
/// [`LocateConfig`], not a hidden literal.
pub const DEFAULT_REGION_CENTER: Coordinate = Coordinate {
    lat: 28.6139,
    lng: 77.2090,
};

pub const DEFAULT_LOCATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort source of the caller's current position. Permission
/// prompts and hardware are behind this seam; `None` means the
/// position could not be resolved.
#[async_trait]
pub trait Locator: Send + Sync {
    async fn current_position(&self) -> Option<Coordinate>;
}

/// How long to wait on the locator, and where to fall back to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocateConfig {
    pub timeout: Duration,
    pub fallback: Coordinate,
}

impl Default for LocateConfig {
    fn default() -> Self {
        LocateConfig {
            timeout: DEFAULT_LOCATE_TIMEOUT,
            fallback: DEFAULT_REGION_CENTER,
        }
    }
}

/// Resolves the caller's position, falling back on denial, absence or
/// timeout. Never an error: an unresolvable position is an expected
/// outcome, recovered silently.
pub async fn locate<L>(locator: &L, config: &LocateConfig) -> Coordinate
where
    L: Locator + ?Sized,
{
    match tokio::time::timeout(config.timeout, locator.current_position()).await {
        Ok(Some(position)) => position,
        Ok(None) => {
            debug!("position unavailable, using fallback {}", config.fallback);
            config.fallback
        }
        Err(_) => {
            debug!("position timed out, using fallback {}", config.fallback);
            config.fallback
        }
    }
}
