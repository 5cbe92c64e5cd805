//! Quote and fill synthesis
//!
//! All randomness in the workspace goes through [`QuoteSource`]. Handlers
//! and services stay deterministic under test by swapping in a
//! [`FixedQuoteSource`].

use chrono::Utc;
use common::model::quote::StockQuote;
use common::money::{precision, Price};
use rand::Rng;
use rust_decimal::Decimal;

use crate::listing::{band_for, SymbolBand, LISTING};

/// Source of synthesized market data
pub trait QuoteSource: Send + Sync {
    /// Quote for a single symbol
    fn quote(&self, symbol: &str) -> StockQuote;

    /// Quotes for the whole listing
    fn listing(&self) -> Vec<StockQuote> {
        LISTING.iter().map(|band| self.quote(band.symbol)).collect()
    }

    /// Execution price used when a trade request omits one
    fn fill_price(&self, symbol: &str) -> Price;

    /// Share count used when a trade request omits one
    fn fill_quantity(&self) -> u32;
}

/// Production source: uniform draws within each symbol's band
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomQuoteSource;

impl RandomQuoteSource {
    pub fn new() -> Self {
        Self
    }

    fn price_in_band(band: &SymbolBand) -> Price {
        let mut rng = rand::rng();
        let cents = band.price_floor_cents + rng.random_range(0..=band.price_spread_cents);
        Decimal::new(cents, 2)
    }
}

impl QuoteSource for RandomQuoteSource {
    fn quote(&self, symbol: &str) -> StockQuote {
        let band = band_for(symbol);
        let mut rng = rand::rng();
        let change_cents = rng.random_range(-band.change_spread_cents..=band.change_spread_cents);
        StockQuote {
            symbol: symbol.to_string(),
            price: Self::price_in_band(band),
            change: Decimal::new(change_cents, 2),
            volume: band.volume_floor + rng.random_range(0..band.volume_spread),
            timestamp: Utc::now(),
        }
    }

    fn fill_price(&self, symbol: &str) -> Price {
        Self::price_in_band(band_for(symbol))
    }

    fn fill_quantity(&self) -> u32 {
        rand::rng().random_range(1..=10)
    }
}

/// Deterministic source for tests: every draw returns the configured values
#[derive(Debug, Clone)]
pub struct FixedQuoteSource {
    /// Price returned for every quote and fill
    pub price: Price,
    /// Change returned for every quote
    pub change: Price,
    /// Volume returned for every quote
    pub volume: u64,
    /// Quantity returned for every defaulted fill
    pub quantity: u32,
}

impl FixedQuoteSource {
    pub fn new(price: Price, quantity: u32) -> Self {
        Self {
            price,
            change: Decimal::ZERO,
            volume: 1_000,
            quantity,
        }
    }
}

impl QuoteSource for FixedQuoteSource {
    fn quote(&self, symbol: &str) -> StockQuote {
        StockQuote {
            symbol: symbol.to_string(),
            price: precision::to_money(self.price),
            change: precision::to_money(self.change),
            volume: self.volume,
            timestamp: Utc::now(),
        }
    }

    fn fill_price(&self, _symbol: &str) -> Price {
        self.price
    }

    fn fill_quantity(&self) -> u32 {
        self.quantity
    }
}
