//! Client-local holdings bookkeeping
//!
//! A convenience cache only. Nothing here is reconciled against the
//! service, which keeps no ledger of its own.

use serde::{Deserialize, Serialize};

/// One client-local position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol
    pub symbol: String,
    /// Shares held locally
    pub quantity: u32,
}

/// Owned portfolio state, passed explicitly to rendering
///
/// Serializes as a bare array of holdings so the stored file is nothing
/// but the `{symbol, quantity}` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current holdings, in insertion order
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Locally-held quantity for a symbol
    pub fn quantity(&self, symbol: &str) -> Option<u32> {
        self.holdings
            .iter()
            .find(|h| h.symbol == symbol)
            .map(|h| h.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Add shares, creating the holding if absent
    pub fn apply_buy(&mut self, symbol: &str, quantity: u32) {
        if let Some(holding) = self.holdings.iter_mut().find(|h| h.symbol == symbol) {
            holding.quantity = holding.quantity.saturating_add(quantity);
        } else {
            self.holdings.push(Holding {
                symbol: symbol.to_string(),
                quantity,
            });
        }
    }

    /// Remove shares; the holding is dropped when it reaches zero or below
    pub fn apply_sell(&mut self, symbol: &str, quantity: u32) {
        if let Some(index) = self.holdings.iter().position(|h| h.symbol == symbol) {
            let holding = &mut self.holdings[index];
            if holding.quantity > quantity {
                holding.quantity -= quantity;
            } else {
                self.holdings.remove(index);
            }
        }
    }
}
