use crate::places::model::{
    strip_tags, DetailsResponse, DirectionsResponse, OpenStatus, SearchResponse,
};

#[test]
fn search_response_keeps_geometry_bearing_places_only() {
    let raw = r#"{
        "status": "OK",
        "results": [
            {
                "place_id": "a",
                "name": "City General Hospital",
                "geometry": { "location": { "lat": 38.9, "lng": -77.03 } },
                "rating": 4.2,
                "user_ratings_total": 320,
                "vicinity": "12 Main St"
            },
            {
                "place_id": "b",
                "name": "Phantom Clinic"
            }
        ]
    }"#;

    let response: SearchResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.status, "OK");

    let candidates = response
        .results
        .into_iter()
        .filter_map(|place| place.into_candidate())
        .collect::<Vec<_>>();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "a");
    assert_eq!(candidates[0].rating, Some(4.2));
    assert_eq!(candidates[0].user_ratings_total, Some(320));
    assert_eq!(candidates[0].vicinity.as_deref(), Some("12 Main St"));
}

#[test]
fn formatted_address_backfills_a_missing_vicinity() {
    let raw = r#"{
        "status": "OK",
        "results": [{
            "place_id": "a",
            "name": "City General Hospital",
            "geometry": { "location": { "lat": 38.9, "lng": -77.03 } },
            "formatted_address": "12 Main St, Springfield"
        }]
    }"#;

    let response: SearchResponse = serde_json::from_str(raw).unwrap();
    let candidate = response.results.into_iter().next().unwrap().into_candidate().unwrap();

    assert_eq!(candidate.vicinity.as_deref(), Some("12 Main St, Springfield"));
}

#[test]
fn zero_results_parses_as_an_empty_list() {
    let raw = r#"{ "status": "ZERO_RESULTS", "results": [] }"#;
    let response: SearchResponse = serde_json::from_str(raw).unwrap();

    assert_eq!(response.status, "ZERO_RESULTS");
    assert!(response.results.is_empty());
}

#[test]
fn details_resolve_open_status_from_structured_hours() {
    let open = r#"{
        "status": "OK",
        "result": {
            "opening_hours": { "open_now": true },
            "formatted_phone_number": "011 2658 8500",
            "business_status": "OPERATIONAL"
        }
    }"#;

    let response: DetailsResponse = serde_json::from_str(open).unwrap();
    let details = response.result.unwrap().into_details();

    assert_eq!(details.open, OpenStatus::Open);
    assert_eq!(details.phone.as_deref(), Some("011 2658 8500"));
    assert_eq!(details.business_status.as_deref(), Some("OPERATIONAL"));
}

#[test]
fn details_without_hours_stay_unknown() {
    let raw = r#"{
        "status": "OK",
        "result": { "business_status": "OPERATIONAL" }
    }"#;

    let response: DetailsResponse = serde_json::from_str(raw).unwrap();
    let details = response.result.unwrap().into_details();

    // No structured hours data means no guessed boolean.
    assert_eq!(details.open, OpenStatus::Unknown);
}

#[test]
fn details_with_closed_hours_are_definitive() {
    let raw = r#"{
        "status": "OK",
        "result": { "opening_hours": { "open_now": false } }
    }"#;

    let response: DetailsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.result.unwrap().into_details().open, OpenStatus::Closed);
}

#[test]
fn directions_extract_the_first_leg() {
    let raw = r#"{
        "status": "OK",
        "routes": [{
            "legs": [{
                "distance": { "text": "4.1 km" },
                "duration": { "text": "12 mins" },
                "steps": [
                    {
                        "html_instructions": "Head <b>north</b> on Elm St",
                        "distance": { "text": "0.3 km" }
                    },
                    {
                        "html_instructions": "Turn <b>left</b> onto Oak Ave",
                        "distance": { "text": "3.8 km" }
                    }
                ]
            }]
        }]
    }"#;

    let response: DirectionsResponse = serde_json::from_str(raw).unwrap();
    let route = response
        .routes
        .into_iter()
        .next()
        .and_then(|route| route.legs.into_iter().next())
        .map(|leg| leg.into_route())
        .unwrap();

    assert_eq!(route.distance, "4.1 km");
    assert_eq!(route.duration, "12 mins");
    assert_eq!(route.steps.len(), 2);
    assert_eq!(route.steps[0].instruction, "Head north on Elm St");
    assert_eq!(route.steps[1].distance, "3.8 km");
}

#[test]
fn tag_stripping_keeps_plain_text_intact() {
    assert_eq!(strip_tags("Continue straight"), "Continue straight");
    assert_eq!(
        strip_tags("Take the <b>2nd</b> exit<div style=\"x\">roundabout</div>"),
        "Take the 2nd exitroundabout"
    );
}
