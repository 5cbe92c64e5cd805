//! Trade order and result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{precision, Amount, Price};
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Trade direction (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// Past-tense verb used in confirmation messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            TradeAction::Buy => "bought",
            TradeAction::Sell => "sold",
        }
    }
}

/// Buy/sell request body
///
/// Every field is optional; the service fills in defaults for whatever the
/// caller omits. The `stockSymbol` and `stock_price` spellings are accepted
/// for compatibility with older clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct TradeRequest {
    /// Ticker symbol, uppercased by the service ("UNKNOWN" if absent)
    #[serde(default, alias = "stockSymbol", skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Number of shares (random 1-10 if absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Execution price per share (synthesized if absent)
    #[serde(default, alias = "stock_price", skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Trade direction (defaults to the endpoint's own action)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<TradeAction>,
}

/// Result of a mock trade execution, never persisted anywhere
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct TradeResult {
    /// Unique transaction ID
    pub id: Uuid,
    /// Ticker symbol, uppercase
    pub symbol: String,
    /// Trade direction
    pub action: TradeAction,
    /// Number of shares
    pub quantity: u32,
    /// Execution price per share
    pub price: Price,
    /// price * quantity, rounded to cents
    pub total_cost: Amount,
    /// Execution timestamp
    pub timestamp: DateTime<Utc>,
    /// Always true for well-formed requests
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
}

impl TradeResult {
    /// Build a confirmed trade, stamping a fresh ID and timestamp
    pub fn execute(symbol: String, action: TradeAction, quantity: u32, price: Price) -> Self {
        let price = precision::to_money(price);
        let total_cost = precision::total_cost(price, quantity);
        let message = format!(
            "Successfully {} {} shares of {} at ${} each",
            action.past_tense(),
            quantity,
            symbol,
            price,
        );
        Self {
            id: Uuid::new_v4(),
            symbol,
            action,
            quantity,
            price,
            total_cost,
            timestamp: Utc::now(),
            success: true,
            message,
        }
    }
}
