mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::setup_test_app;
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_greeting() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Varsity API is up and running");
}

#[tokio::test]
async fn test_unknown_route_returns_envelope() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/nope")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Not found");
    assert_eq!(body["errorMessages"][0]["path"], "/api/v1/nope");
    assert_eq!(body["errorMessages"][0]["message"], "Api Not found");
}

#[tokio::test]
async fn test_unknown_nested_route_reports_its_path() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v2/students")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["errorMessages"][0]["path"], "/api/v2/students");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["paths"]["/api/v1/auth/login"].is_object());
    assert!(body["paths"]["/api/v1/students/create-student"].is_object());
}
