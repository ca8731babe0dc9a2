//! Integration tests for the HTTP adapter.
//!
//! These drive the full router in-process and check status codes and JSON
//! bodies for the payment endpoints.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use chrono::{Months, Utc};
use http_body_util::BodyExt;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_types::{SystemClock, UuidGenerator};
use tower::ServiceExt;

/// Helper to create a test server backed by the system clock.
fn create_test_server() -> HttpServer<SystemClock, UuidGenerator> {
    HttpServer::new(PaymentService::default())
}

/// Helper to build a JSON POST request.
fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Helper to read a response body as JSON.
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn expiration_in_months(months: u32) -> String {
    let date = Utc::now().date_naive() + Months::new(months);
    date.format("%Y-%m-%d").to_string()
}

fn expired_two_months_ago() -> String {
    let date = Utc::now().date_naive() - Months::new(2);
    date.format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_health() {
    let app = create_test_server().router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_create_card_payment_returns_201() {
    let app = create_test_server().router();

    let response = app
        .oneshot(post_json(
            "/api/payments/credit-card",
            serde_json::json!({
                "amount": "100",
                "description": "Order #123",
                "card_number": "4111 1111-1111 1111",
                "card_holder_name": "John Doe",
                "expiration_date": expiration_in_months(6),
                "cvv": "123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["payment_type"], "CREDIT_CARD");
    assert_eq!(json["currency"], "BRL");
    assert_eq!(json["display_amount"], "R$ 100.00");
    assert_eq!(json["description"], "Order #123");
    assert_eq!(json["details"]["masked_card_number"], "************1111");
    assert!(json["details"].get("cvv").is_none());
}

#[tokio::test]
async fn test_invalid_card_returns_422_with_every_card_error() {
    let app = create_test_server().router();

    let response = app
        .oneshot(post_json(
            "/api/payments/credit-card",
            serde_json::json!({
                "amount": "100",
                "description": "Order #123",
                "card_number": "123",
                "card_holder_name": " ",
                "expiration_date": expired_two_months_ago(),
                "cvv": "1"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], 422);
    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 4);
    assert_eq!(details[1]["code"], "MISSING_FIELD");
    assert_eq!(details[1]["message"], "Card holder name is required.");
    assert_eq!(details[2]["code"], "EXPIRED_CARD");
}

#[tokio::test]
async fn test_non_positive_amount_returns_single_error() {
    let app = create_test_server().router();

    let response = app
        .oneshot(post_json(
            "/api/payments/credit-card",
            serde_json::json!({ "amount": "-5", "card_number": "nope" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["code"], "INVALID_AMOUNT");
}

#[tokio::test]
async fn test_create_pix_payment_returns_201() {
    let app = create_test_server().router();

    let response = app
        .oneshot(post_json(
            "/api/payments/pix",
            serde_json::json!({
                "amount": "49.90",
                "description": "Monthly plan",
                "pix_key": "jane@example.com"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["payment_type"], "PIX");
    assert_eq!(json["details"]["method"], "pix");
    assert_eq!(json["details"]["pix_key"], "jane@example.com");
}

#[tokio::test]
async fn test_malformed_json_returns_400_error_body() {
    let app = create_test_server().router();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/payments/credit-card")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_missing_amount_returns_400_error_body() {
    let app = create_test_server().router();

    let response = app
        .oneshot(post_json(
            "/api/payments/pix",
            serde_json::json!({ "description": "Monthly plan" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().unwrap().contains("amount"));
}
