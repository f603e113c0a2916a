use std::time::Duration;

use async_trait::async_trait;

use crate::geo::Coordinate;
use crate::locate::{locate, LocateConfig, Locator, DEFAULT_REGION_CENTER};

struct Fixed(Coordinate);

#[async_trait]
impl Locator for Fixed {
    async fn current_position(&self) -> Option<Coordinate> {
        Some(self.0)
    }
}

struct Denied;

#[async_trait]
impl Locator for Denied {
    async fn current_position(&self) -> Option<Coordinate> {
        None
    }
}

struct Stalled;

#[async_trait]
impl Locator for Stalled {
    async fn current_position(&self) -> Option<Coordinate> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        None
    }
}

#[tokio::test]
async fn resolved_position_wins() {
    let position = Coordinate { lat: 12.97, lng: 77.59 };
    let resolved = locate(&Fixed(position), &LocateConfig::default()).await;

    assert_eq!(resolved, position);
}

#[tokio::test]
async fn denial_falls_back_to_the_region_center() {
    let resolved = locate(&Denied, &LocateConfig::default()).await;
    assert_eq!(resolved, DEFAULT_REGION_CENTER);
}

#[tokio::test(start_paused = true)]
async fn timeout_falls_back_to_the_configured_coordinate() {
    let fallback = Coordinate { lat: 1.29, lng: 103.85 };
    let config = LocateConfig {
        timeout: Duration::from_secs(5),
        fallback,
    };

    let resolved = locate(&Stalled, &config).await;
    assert_eq!(resolved, fallback);
}
