// trade-api/src/lib.rs
pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use mock_market::ExchangeService;
use tower_http::cors::{Any, CorsLayer};

use crate::api::health::health_check;
use crate::api::stock::{buy_stock, check_stock, preflight, sell_stock};

/// App state shared across handlers
pub struct AppState {
    /// Mock exchange backing every endpoint
    pub exchange: ExchangeService,
}

/// Build the service router; shared by the binary and the tests
///
/// The CORS layer lives here rather than in `main` because the permissive
/// headers are part of the endpoint contract, not deployment trim.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/stock/check", post(check_stock).options(preflight))
        .route("/stock/buy", post(buy_stock).options(preflight))
        .route("/stock/sell", post(sell_stock).options(preflight))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}
