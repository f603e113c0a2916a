/// Floor applied to the distance term, keeping colocated facilities
/// from blowing the score up.
pub const DISTANCE_FLOOR_KM: f64 = 0.1;

/// Neutral stand-in for an unrated facility.
pub const NEUTRAL_RATING: f64 = 3.0;

/// Review volume above which a facility counts as established.
pub const POPULARITY_THRESHOLD: u32 = 50;

pub const POPULARITY_BONUS: f64 = 1.0;

/// Composite relevance of a facility, higher is better.
///
/// `5 / max(distance, 0.1km) + rating + popularity`: proximity
/// dominates, the rating breaks ties between comparably near
/// facilities, and an established review volume earns a flat bonus
/// over unreviewed ones.
pub fn relevance(distance_km: f64, rating: Option<f64>, user_ratings_total: Option<u32>) -> f64 {
    let proximity = 5.0 / distance_km.max(DISTANCE_FLOOR_KM);

    let popularity = match user_ratings_total {
        Some(total) if total > POPULARITY_THRESHOLD => POPULARITY_BONUS,
        _ => 0.0,
    };

    proximity + rating.unwrap_or(NEUTRAL_RATING) + popularity
}
