//! Router-level tests for everything that resolves before the repository:
//! request validation, path-parameter parsing, and the health probe. The
//! pool is lazy, so no database is touched.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pawtrack_api::{app, config::Config, AppState};

fn test_app() -> axum::Router {
    let db = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/pawtrack_test")
        .expect("lazy pool");

    app(AppState {
        db,
        config: Arc::new(Config {
            database_url: "postgres://postgres@localhost/pawtrack_test".into(),
            host: "127.0.0.1".into(),
            port: 0,
            frontend_url: "http://localhost:3000".into(),
        }),
    })
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_is_ok() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_pet_with_empty_name_is_rejected() {
    let response = test_app()
        .oneshot(json_request("POST", "/api/pets", serde_json::json!({ "name": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 422);
    assert!(body["error"]["details"]["name"].is_array());
}

#[tokio::test]
async fn create_event_without_pets_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/events",
            serde_json::json!({
                "title": "Annual checkup",
                "category": "vet_visit",
                "event_date": "2026-09-01",
                "pet_ids": [],
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Event must be linked to at least one pet"
    );
}

#[tokio::test]
async fn create_event_with_unknown_category_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/events",
            serde_json::json!({
                "title": "Annual checkup",
                "category": "grooming",
                "event_date": "2026-09-01",
                "petIds": [1],
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_integer_pet_id_is_a_client_error() {
    let response = test_app()
        .oneshot(Request::get("/api/pets/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_integer_vaccination_id_is_a_client_error() {
    let response = test_app()
        .oneshot(
            Request::delete("/api/vaccinations/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_weight_entry_with_nonpositive_weight_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/weight-entries",
            serde_json::json!({ "pet_id": 1, "weight": 0.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"]["details"]["weight"].is_array());
}

#[tokio::test]
async fn create_medication_with_empty_name_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/pets/1/medications",
            serde_json::json!({ "name": "", "started_on": "2026-01-01" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
