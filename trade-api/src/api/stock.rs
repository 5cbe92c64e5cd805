//! Stock trading handlers
//!
//! Three mock endpoints: check quotes, buy, sell. Request bodies are parsed
//! by hand so that a malformed payload follows the contract's 500 error
//! path instead of an extractor rejection.

use std::sync::Arc;

use axum::{extract::State, Json};
use common::model::quote::{CheckRequest, StockQuote};
use common::model::trade::{TradeAction, TradeRequest, TradeResult};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{ApiError, ErrorBody};
use crate::AppState;

/// Parse a request body, treating an empty body as an empty object
fn parse_body<T: DeserializeOwned + Default>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::MalformedRequest(e.to_string()))
}

fn execute_trade(
    state: &AppState,
    action: TradeAction,
    body: &str,
) -> Result<Json<TradeResult>, ApiError> {
    let request: TradeRequest = parse_body(body)?;
    let result = state.exchange.execute(action, request);
    info!(id = %result.id, symbol = %result.symbol, action = ?result.action, "mock trade executed");
    Ok(Json(result))
}

/// Check current stock quotes
#[utoipa::path(
    post,
    path = "/stock/check",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Current quotes for the listing", body = [StockQuote]),
        (status = 500, description = "Malformed request body", body = ErrorBody)
    ),
    tag = "stock"
)]
pub async fn check_stock(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<Vec<StockQuote>>, ApiError> {
    let request: CheckRequest = parse_body(&body)?;
    let quotes = state.exchange.check(request.stock_symbol.as_deref());
    Ok(Json(quotes))
}

/// Buy shares
#[utoipa::path(
    post,
    path = "/stock/buy",
    request_body = TradeRequest,
    responses(
        (status = 200, description = "Trade confirmation", body = TradeResult),
        (status = 500, description = "Malformed request body", body = ErrorBody)
    ),
    tag = "stock"
)]
pub async fn buy_stock(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<TradeResult>, ApiError> {
    execute_trade(&state, TradeAction::Buy, &body)
}

/// Sell shares
#[utoipa::path(
    post,
    path = "/stock/sell",
    request_body = TradeRequest,
    responses(
        (status = 200, description = "Trade confirmation", body = TradeResult),
        (status = 500, description = "Malformed request body", body = ErrorBody)
    ),
    tag = "stock"
)]
pub async fn sell_stock(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<TradeResult>, ApiError> {
    execute_trade(&state, TradeAction::Sell, &body)
}

/// CORS preflight acknowledgement
///
/// Short-circuits with a 200 before any business logic; the CORS layer
/// attaches the actual negotiation headers.
#[utoipa::path(
    options,
    path = "/stock/buy",
    responses(
        (status = 200, description = "Preflight acknowledged")
    ),
    tag = "stock"
)]
pub async fn preflight() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "CORS preflight successful" }))
}
