//! HTTP client for the mock trading service

use common::model::quote::{CheckRequest, StockQuote};
use common::model::trade::{TradeRequest, TradeResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::endpoints::EndpointMap;
use crate::error::{Error, Result};

/// Error body shape returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the check/buy/sell endpoints
pub struct TradingClient {
    client: Client,
    endpoints: EndpointMap,
}

impl TradingClient {
    /// Create a client for the given endpoint map
    pub fn new(endpoints: EndpointMap) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    /// Fetch current quotes, optionally asking after one symbol
    pub async fn check_stock(&self, symbol: Option<&str>) -> Result<Vec<StockQuote>> {
        let request = CheckRequest {
            stock_symbol: symbol.map(str::to_string),
        };
        debug!(url = %self.endpoints.check, "checking quotes");
        let response = self
            .client
            .post(&self.endpoints.check)
            .json(&request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Submit a buy order
    pub async fn buy(&self, request: &TradeRequest) -> Result<TradeResult> {
        self.trade(&self.endpoints.buy, request).await
    }

    /// Submit a sell order
    pub async fn sell(&self, request: &TradeRequest) -> Result<TradeResult> {
        self.trade(&self.endpoints.sell, request).await
    }

    async fn trade(&self, url: &str, request: &TradeRequest) -> Result<TradeResult> {
        debug!(%url, "submitting trade");
        let response = self.client.post(url).json(request).send().await?;
        Self::decode(response).await
    }

    /// Decode a success payload, or surface the service's error message
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("request failed with status {}", status));
            Err(Error::Api { message })
        }
    }
}
