use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use mock_market::{ExchangeService, FixedQuoteSource, QuoteSource, RandomQuoteSource};
use rust_decimal_macros::dec;
use serde_json::Value;
use tower::ServiceExt;
use trade_api::{router, AppState};
use uuid::Uuid;

fn test_app(source: Box<dyn QuoteSource>) -> Router {
    router(Arc::new(AppState {
        exchange: ExchangeService::new(source),
    }))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn buy_echoes_explicit_price_and_computes_total() {
    let app = test_app(Box::new(RandomQuoteSource::new()));

    let request = post_json(
        "/stock/buy",
        r#"{"symbol":"AAPL","quantity":5,"stock_price":200}"#,
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["action"], "buy");
    assert_eq!(body["quantity"], 5);
    assert_eq!(body["price"], "200.00");
    assert_eq!(body["total_cost"], "1000.00");
    assert_eq!(body["success"], true);
    assert!(!body["message"].as_str().unwrap().is_empty());
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
}

#[tokio::test]
async fn buy_timestamp_is_valid_and_within_window() {
    let app = test_app(Box::new(FixedQuoteSource::new(dec!(50), 3)));

    let before = chrono::Utc::now();
    let response = app.oneshot(post_json("/stock/buy", "{}")).await.unwrap();
    let after = chrono::Utc::now();

    let body = body_json(response).await;
    let timestamp = chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
        .unwrap()
        .with_timezone(&chrono::Utc);
    assert!(timestamp >= before);
    assert!(timestamp <= after);
}

#[tokio::test]
async fn sell_defaults_come_from_the_generator() {
    let app = test_app(Box::new(FixedQuoteSource::new(dec!(50), 3)));

    let response = app.oneshot(post_json("/stock/sell", "{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["symbol"], "UNKNOWN");
    assert_eq!(body["action"], "sell");
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["price"], "50.00");
    assert_eq!(body["total_cost"], "150.00");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn malformed_body_returns_500_with_error_shape() {
    let app = test_app(Box::new(RandomQuoteSource::new()));

    let response = app
        .oneshot(post_json("/stock/buy", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn preflight_returns_200_with_cors_headers() {
    let app = test_app(Box::new(RandomQuoteSource::new()));

    for path in ["/stock/check", "/stock/buy", "/stock/sell"] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "OPTIONS {}", path);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*",
            "OPTIONS {}",
            path
        );
    }
}

#[tokio::test]
async fn check_returns_the_listing() {
    let app = test_app(Box::new(RandomQuoteSource::new()));

    let response = app.oneshot(post_json("/stock/check", "{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let quotes = body.as_array().unwrap();
    assert_eq!(quotes.len(), 5);
    for quote in quotes {
        assert!(quote["symbol"].is_string());
        assert!(quote["volume"].as_u64().unwrap() > 0);
        assert!(quote["price"].is_string());
    }
}

#[tokio::test]
async fn check_echoes_a_requested_symbol() {
    let app = test_app(Box::new(RandomQuoteSource::new()));

    let response = app
        .oneshot(post_json("/stock/check", r#"{"stockSymbol":"NFLX"}"#))
        .await
        .unwrap();
    let body = body_json(response).await;
    let quotes = body.as_array().unwrap();
    assert_eq!(quotes.len(), 6);
    assert!(quotes.iter().any(|q| q["symbol"] == "NFLX"));
}

#[tokio::test]
async fn check_accepts_an_empty_body() {
    let app = test_app(Box::new(RandomQuoteSource::new()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/stock/check")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app(Box::new(RandomQuoteSource::new()));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
