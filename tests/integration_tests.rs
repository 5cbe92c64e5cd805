// Full-stack tests: a real server on an ephemeral port driven by the real
// client, mirroring trades into the local portfolio.

use std::sync::Arc;

use common::model::trade::TradeRequest;
use mock_market::{ExchangeService, FixedQuoteSource, QuoteSource, RandomQuoteSource};
use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use trade_api::{router, AppState};
use trade_client::{EndpointMap, Portfolio, TradingClient};

async fn spawn_server(source: Box<dyn QuoteSource>) -> String {
    let state = Arc::new(AppState {
        exchange: ExchangeService::new(source),
    });
    let app = router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn trade(symbol: &str, quantity: u32) -> TradeRequest {
    TradeRequest {
        symbol: Some(symbol.to_string()),
        quantity: Some(quantity),
        price: Some(dec!(200)),
        action: None,
    }
}

#[tokio::test]
async fn buy_sell_round_trip_updates_portfolio() {
    let base = spawn_server(Box::new(FixedQuoteSource::new(dec!(200), 5))).await;
    let client = TradingClient::new(EndpointMap::from_base(&base));
    let mut portfolio = Portfolio::new();

    // Two buys accumulate
    let result = client.buy(&trade("AAPL", 5)).await.unwrap();
    assert!(result.success);
    assert_eq!(result.total_cost, dec!(1000.00));
    portfolio.apply_buy(&result.symbol, result.quantity);

    let result = client.buy(&trade("AAPL", 2)).await.unwrap();
    portfolio.apply_buy(&result.symbol, result.quantity);
    assert_eq!(portfolio.quantity("AAPL"), Some(7));

    // Selling the full position clears it
    let result = client.sell(&trade("AAPL", 7)).await.unwrap();
    assert!(result.success);
    portfolio.apply_sell(&result.symbol, result.quantity);
    assert_eq!(portfolio.quantity("AAPL"), None);
    assert!(portfolio.is_empty());
}

#[tokio::test]
async fn check_returns_quotes_over_the_wire() {
    let base = spawn_server(Box::new(RandomQuoteSource::new())).await;
    let client = TradingClient::new(EndpointMap::from_base(&base));

    let quotes = client.check_stock(None).await.unwrap();
    assert_eq!(quotes.len(), 5);

    let quotes = client.check_stock(Some("NFLX")).await.unwrap();
    assert_eq!(quotes.len(), 6);
    assert!(quotes.iter().any(|q| q.symbol == "NFLX"));
}

#[tokio::test]
async fn server_error_message_reaches_the_client() {
    let base = spawn_server(Box::new(RandomQuoteSource::new())).await;

    // The typed client cannot produce a malformed body, so go in raw
    let response = reqwest::Client::new()
        .post(format!("{}/stock/buy", base))
        .header("content-type", "application/json")
        .body("{oops")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn transport_failure_surfaces_as_a_client_error() {
    // Nothing is listening here
    let client = TradingClient::new(EndpointMap::from_base("http://127.0.0.1:1"));
    let err = client.check_stock(None).await.unwrap_err();
    assert!(err.to_string().starts_with("Network error occurred"));
}
