//! Mock exchange service
//!
//! Stateless: every call synthesizes its response from the request plus the
//! configured quote source. There is no order book, no inventory, and no
//! persistence.

use common::model::quote::StockQuote;
use common::model::trade::{TradeAction, TradeRequest, TradeResult};
use tracing::debug;

use crate::generator::QuoteSource;

/// Placeholder symbol used when a trade request omits one
pub const UNKNOWN_SYMBOL: &str = "UNKNOWN";

/// Facade over a quote source, producing check and trade responses
pub struct ExchangeService {
    source: Box<dyn QuoteSource>,
}

impl ExchangeService {
    /// Create a service backed by the given quote source
    pub fn new(source: Box<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Quotes for the whole listing
    ///
    /// A requested symbol outside the listing is appended as a synthesized
    /// quote so clients always see the name they asked about.
    pub fn check(&self, requested: Option<&str>) -> Vec<StockQuote> {
        let mut quotes = self.source.listing();
        if let Some(symbol) = requested {
            let symbol = symbol.trim().to_uppercase();
            if !symbol.is_empty() && !quotes.iter().any(|q| q.symbol == symbol) {
                quotes.push(self.source.quote(&symbol));
            }
        }
        debug!(count = quotes.len(), "synthesized quote listing");
        quotes
    }

    /// Execute a mock trade: apply defaults, compute the total, always succeed
    ///
    /// No inventory check, no balance check, no order matching. A request
    /// that carries its own `action` field wins over the endpoint's.
    pub fn execute(&self, action: TradeAction, request: TradeRequest) -> TradeResult {
        let symbol = request
            .symbol
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string());
        let action = request.action.unwrap_or(action);
        let quantity = request
            .quantity
            .unwrap_or_else(|| self.source.fill_quantity());
        let price = request
            .price
            .unwrap_or_else(|| self.source.fill_price(&symbol));

        let result = TradeResult::execute(symbol, action, quantity, price);
        debug!(id = %result.id, symbol = %result.symbol, quantity = result.quantity, "executed mock trade");
        result
    }
}
