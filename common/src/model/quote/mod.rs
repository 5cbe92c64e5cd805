//! Stock quote models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Price;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Snapshot quote for a single symbol, synthesized per request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct StockQuote {
    /// Ticker symbol (e.g., "AAPL")
    pub symbol: String,
    /// Last price
    pub price: Price,
    /// Signed percentage-style change since the previous close
    pub change: Price,
    /// Shares traded
    pub volume: u64,
    /// Generation timestamp
    pub timestamp: DateTime<Utc>,
}

/// Quote check request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct CheckRequest {
    /// Requested symbol; the full listing is returned either way
    #[serde(
        default,
        rename = "stockSymbol",
        alias = "symbol",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock_symbol: Option<String>,
}
