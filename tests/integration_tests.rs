// Integration tests for the TripCraft HTTP surface

use actix_web::{http::header, http::StatusCode, test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tripcraft::models::{Booking, BookingStatus};
use tripcraft::routes::{self, AppState};
use tripcraft::services::{
    BookingStore, FirestoreClient, FirestoreError, SessionIssuer, StaticCredentialVerifier,
};

struct StubStore {
    fail: bool,
}

#[async_trait]
impl BookingStore for StubStore {
    async fn bookings_for(&self, user_email: &str) -> Result<Vec<Booking>, FirestoreError> {
        if self.fail {
            return Err(FirestoreError::ApiError("offline".to_string()));
        }
        Ok(vec![Booking {
            id: "b1".to_string(),
            destination: "Kerala Backwaters".to_string(),
            booking_date: "2025-02-01".to_string(),
            travel_date: "2025-04-01".to_string(),
            status: BookingStatus::Pending,
            price: "₹18,000".to_string(),
            number_of_people: 3,
            user_email: user_email.to_string(),
            user_name: "Asha".to_string(),
        }])
    }
}

fn state_with(store: Arc<dyn BookingStore>) -> AppState {
    AppState {
        bookings: store,
        verifier: Arc::new(StaticCredentialVerifier::new(
            "asha@example.com".to_string(),
            "letmein".to_string(),
            "u1".to_string(),
            "Asha".to_string(),
        )),
        sessions: Arc::new(SessionIssuer::new("integration-secret", 3600).unwrap()),
    }
}

fn state(fail: bool) -> AppState {
    state_with(Arc::new(StubStore { fail }))
}

fn ids(body: &Value) -> Vec<String> {
    body["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["packages"], 9);
}

#[actix_web::test]
async fn test_list_with_theme_filter() {
    let app = app!(state(false));
    let req = test::TestRequest::get()
        .uri("/api/v1/packages?theme=luxury&category=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ids(&body), vec!["rajasthan", "singapore", "paris"]);
    assert_eq!(body["totalPackages"], 9);
    assert_eq!(body["filteredCount"], 3);
    assert_eq!(body["hasActiveFilters"], true);
    assert_eq!(body["packages"][2]["priceRange"], "₹1.5L - ₹2.5L");
}

#[actix_web::test]
async fn test_unknown_theme_is_bad_request() {
    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/v1/packages?theme=desert").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_recommendations_from_duration() {
    let app = app!(state(false));
    let req = test::TestRequest::get()
        .uri("/api/v1/packages/recommendations?duration=5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "Domestic Trips");
    assert_eq!(body["category"], "domestic");
    assert_eq!(ids(&body), vec!["manali", "kerala", "rajasthan"]);
    assert_eq!(body["hasActiveFilters"], false);
}

#[actix_web::test]
async fn test_recommendations_from_dates_with_filter() {
    let app = app!(state(false));
    let req = test::TestRequest::get()
        .uri("/api/v1/packages/recommendations?startDate=2025-03-12&endDate=2025-03-10&q=beach")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["duration"], 2);
    assert_eq!(body["title"], "Weekend Escapes");
    assert_eq!(body["totalPackages"], 3);
    assert_eq!(ids(&body), vec!["goa", "pondicherry"]);
}

#[actix_web::test]
async fn test_recommendations_without_dates() {
    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/v1/packages/recommendations").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "Recommended Packages");
    assert_eq!(body["filteredCount"], 9);
}

#[actix_web::test]
async fn test_search_route() {
    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/v1/search/GOA").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["query"], "GOA");
    assert_eq!(ids(&body), vec!["goa"]);

    let req = test::TestRequest::get().uri("/api/v1/search/xyz-nonexistent").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 0);
    assert!(body["packages"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_package_detail() {
    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/v1/packages/paris").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Paris Romance");
    assert_eq!(body["bestTime"], "April to June, September to November");
    assert_eq!(body["highlights"][0], "Eiffel Tower");

    let req = test::TestRequest::get().uri("/api/v1/packages/atlantis").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_filter_options() {
    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/v1/filters").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["themes"].as_array().unwrap().len(), 8);
    assert_eq!(body["categories"][1]["label"], "Hill Stations");
    assert_eq!(body["defaultMaxPrice"], 250000);
}

#[actix_web::test]
async fn test_booking_submission() {
    let app = app!(state(false));
    let req = test::TestRequest::post()
        .uri("/api/v1/packages/kerala/bookings")
        .set_json(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "preferredDate": "2099-01-01",
            "numberOfPeople": 4
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["packageId"], "kerala");
    assert!(body["message"].as_str().unwrap().contains("Kerala Backwaters"));
}

#[actix_web::test]
async fn test_booking_rejects_past_date() {
    let app = app!(state(false));
    let req = test::TestRequest::post()
        .uri("/api/v1/packages/kerala/bookings")
        .set_json(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "preferredDate": "2000-01-01"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

macro_rules! login_token {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "asha@example.com", "password": "letmein" }))
            .to_request();
        let body: Value = test::call_and_read_body_json($app, req).await;
        body["token"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_login_rejects_bad_password() {
    let app = app!(state(false));
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "asha@example.com", "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_profile_requires_session() {
    let app = app!(state(false));
    let req = test::TestRequest::get().uri("/api/v1/profile/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_profile_bookings_from_store() {
    let app = app!(state(false));
    let token = login_token!(&app);

    let req = test::TestRequest::get()
        .uri("/api/v1/profile/bookings")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["source"], "remote");
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert_eq!(body["bookings"][0]["destination"], "Kerala Backwaters");
}

#[actix_web::test]
async fn test_profile_bookings_fall_back_when_store_fails() {
    let app = app!(state(true));
    let token = login_token!(&app);

    let req = test::TestRequest::get()
        .uri("/api/v1/profile/bookings")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["source"], "fallback");
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[1]["destination"], "Ooty Hill Station");
    assert_eq!(bookings[1]["userName"], "Asha");
}

#[actix_web::test]
async fn test_profile_bookings_through_firestore_outage() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let firestore = FirestoreClient::new(
        server.url(),
        String::new(),
        "tripcraft-demo".to_string(),
        "(default)".to_string(),
        "bookings".to_string(),
        std::time::Duration::from_secs(5),
    )
    .unwrap();

    let app = app!(state_with(Arc::new(firestore)));
    let token = login_token!(&app);

    let req = test::TestRequest::get()
        .uri("/api/v1/profile/bookings")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["source"], "fallback");
}
