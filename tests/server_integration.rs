//! HTTP contract tests for the API endpoints

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

use common::{app_state_with, sample_reply, StubProvider};
use wayfarer::server::router;

async fn send(
    state: wayfarer::server::AppState,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let app = router(state);
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn generate_body() -> serde_json::Value {
    serde_json::json!({
        "destination": "Paris",
        "startDate": "2026-06-01",
        "endDate": "2026-06-05",
        "budget": "luxury",
        "interests": ["art", "food"],
        "travelers": 2
    })
}

#[tokio::test]
async fn test_generate_itinerary_returns_itinerary_json() {
    let state = app_state_with(StubProvider::replying(sample_reply("Paris", 5)));

    let (status, body) = send(
        state,
        Method::POST,
        "/api/generateItinerary",
        generate_body(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["destination"], "Paris");
    assert_eq!(body["days"].as_array().unwrap().len(), 5);
    assert_eq!(body["days"][0]["activities"][0]["type"], "attraction");
}

#[tokio::test]
async fn test_generate_itinerary_missing_fields_is_400() {
    let provider = StubProvider::replying(sample_reply("Paris", 5));
    let calls = provider.call_count();
    let state = app_state_with(provider);

    let (status, body) = send(
        state,
        Method::POST,
        "/api/generateItinerary",
        serde_json::json!({"destination": "Paris"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameters");
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_generate_itinerary_wrong_verb_is_405() {
    let state = app_state_with(StubProvider::replying(sample_reply("Paris", 5)));

    let (status, body) = send(
        state,
        Method::GET,
        "/api/generateItinerary",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_generate_itinerary_upstream_failure_is_500() {
    let state = app_state_with(StubProvider::failing("model unavailable"));

    let (status, body) = send(
        state,
        Method::POST,
        "/api/generateItinerary",
        generate_body(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate itinerary");
    assert!(body["details"].as_str().unwrap().contains("model unavailable"));
}

#[tokio::test]
async fn test_generate_itinerary_unparseable_reply_is_500() {
    let state = app_state_with(StubProvider::replying("Sorry, I can only answer in prose."));

    let (status, body) = send(
        state,
        Method::POST,
        "/api/generateItinerary",
        generate_body(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate itinerary");
}

#[tokio::test]
async fn test_get_hotels_paris_luxury_contract() {
    let state = app_state_with(StubProvider::replying("{}"));

    let (status, body) = send(
        state,
        Method::POST,
        "/api/getHotels",
        serde_json::json!({
            "destination": "Paris",
            "checkIn": "2026-06-01",
            "checkOut": "2026-06-05",
            "budget": "luxury"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let hotels = body["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), 5);
    assert_eq!(hotels[0]["name"], "Grand Hôtel du Palais Royal");
    // price = round(stars * 40 * 3.5)
    assert_eq!(hotels[0]["price"], 700);
    assert_eq!(hotels[2]["price"], 420);
    assert_eq!(hotels[0]["currency"], "USD");
    assert!(hotels[0]["bookingUrl"].as_str().unwrap().contains("ss=Paris"));
}

#[tokio::test]
async fn test_get_hotels_unknown_destination_default_multiplier() {
    let state = app_state_with(StubProvider::replying("{}"));

    let (status, body) = send(
        state,
        Method::POST,
        "/api/getHotels",
        serde_json::json!({
            "destination": "Atlantis",
            "checkIn": "2026-06-01",
            "checkOut": "2026-06-05",
            "budget": "platinum"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let hotels = body["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), 5);
    assert_eq!(hotels[0]["name"], "Grand Central Hotel");
    // Unrecognized budget: multiplier 1.5, 5 stars -> 300
    assert_eq!(hotels[0]["price"], 300);
}

#[tokio::test]
async fn test_get_hotels_missing_dates_is_400() {
    let state = app_state_with(StubProvider::replying("{}"));

    let (status, body) = send(
        state,
        Method::POST,
        "/api/getHotels",
        serde_json::json!({"destination": "Paris"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameters");
}

#[tokio::test]
async fn test_get_hotels_wrong_verb_is_405() {
    let state = app_state_with(StubProvider::replying("{}"));

    let (status, _) = send(state, Method::GET, "/api/getHotels", serde_json::json!({})).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_probe() {
    let state = app_state_with(StubProvider::replying("{}"));
    let app = router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_hotel_ids_fresh_per_request() {
    let state = app_state_with(StubProvider::replying("{}"));
    let body = serde_json::json!({
        "destination": "Paris",
        "checkIn": "2026-06-01",
        "checkOut": "2026-06-05",
        "budget": "budget"
    });

    let (_, first) = send(state.clone(), Method::POST, "/api/getHotels", body.clone()).await;
    let (_, second) = send(state, Method::POST, "/api/getHotels", body).await;

    assert_ne!(first["hotels"][0]["id"], second["hotels"][0]["id"]);
    assert_eq!(first["hotels"][0]["name"], second["hotels"][0]["name"]);
}
