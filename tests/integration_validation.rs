mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::setup_test_app;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_login_missing_password_field() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"id": "S-00001"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation Error");
    assert_eq!(body["errorMessages"][0]["path"], "password");
}

#[tokio::test]
async fn test_login_empty_password_fails_validation() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"id": "S-00001", "password": ""})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["errorMessages"][0]["path"], "password");
}

#[tokio::test]
async fn test_login_accepts_urlencoded_body() {
    let app = setup_test_app();

    // An empty password trips validation before any database access, which
    // proves the urlencoded body was parsed.
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("id=S-00001&password="))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Validation Error");
    assert_eq!(body["errorMessages"][0]["path"], "password");
}

#[tokio::test]
async fn test_create_student_invalid_email() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/students/create-student")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "studentId": "S-00001",
                "name": {"firstName": "Ann"},
                "email": "not-an-email"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["errorMessages"][0]["path"], "email");
}

#[tokio::test]
async fn test_create_student_missing_name() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/students/create-student")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "studentId": "S-00001",
                "email": "ann@example.edu"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["errorMessages"][0]["path"], "name");
    assert_eq!(body["errorMessages"][0]["message"], "name is required");
}

#[tokio::test]
async fn test_create_semester_rejects_wrong_field_type() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/academic-semesters/create-semester")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "Autumn",
                "code": "01",
                "year": "not-a-number",
                "startMonth": "January",
                "endMonth": "April"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}
