use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use dotenv::dotenv;
use log::info;

use careroute::geo::Coordinate;
use careroute::locate::Locator;
use careroute::places::GoogleMapsClient;
use careroute::session::{NullSurface, Places, TriageSession};
use careroute::triage::{TriageResult, Urgency};

/// Caller position from `CALLER_LAT`/`CALLER_LNG`, should the host
/// have one; otherwise the session falls back to the region default.
struct EnvLocator;

#[async_trait]
impl Locator for EnvLocator {
    async fn current_position(&self) -> Option<Coordinate> {
        let lat = env::var("CALLER_LAT").ok()?.parse().ok()?;
        let lng = env::var("CALLER_LNG").ok()?.parse().ok()?;

        Coordinate::from_degree(lat, lng).ok()
    }
}

#[tokio::main]
async fn main() {
    // Load `.env` file
    dotenv().ok();
    env_logger::init();

    let mut args = env::args().skip(1);
    let urgency = Urgency::from_label(&args.next().unwrap_or_default());
    let department = args.next().unwrap_or_default();
    let keywords = args.collect::<Vec<_>>();

    let client = match GoogleMapsClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Configuration error: {err:?}");
            return;
        }
    };

    let places: Places = Arc::new(client);
    let mut session = TriageSession::new(places);
    session.supply_triage(TriageResult::new(urgency, department, "", keywords));

    info!("searching as {urgency}");

    let mut surface = NullSurface;
    match session.search(&EnvLocator, &mut surface).await {
        Ok(facilities) => {
            for (rank, facility) in facilities.iter().enumerate() {
                println!(
                    "{}. {} — {:.1} km, score {:.1}, {:?}{}",
                    rank + 1,
                    facility.name,
                    facility.distance_km,
                    facility.score,
                    facility.open,
                    facility
                        .vicinity
                        .as_deref()
                        .map(|vicinity| format!(" ({vicinity})"))
                        .unwrap_or_default()
                );
            }
        }
        Err(err) => {
            println!("{}", err.user_message());
            return;
        }
    }

    // Directions to the top recommendation, when the service has them.
    let top = session.facilities().first().map(|facility| facility.id.clone());
    if let Some(id) = top {
        if let Some(route) = session.show_directions(&id).await {
            println!("\nRoute: {} ({})", route.distance, route.duration);
            for step in &route.steps {
                println!("  {} — {}", step.instruction, step.distance);
            }
        }
    }
}
