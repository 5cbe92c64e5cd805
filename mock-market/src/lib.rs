//! Synthetic market data for the mock trading service
//!
//! Nothing here talks to a real market. Quotes and fills are fabricated
//! from per-symbol bands, with all randomness behind the [`QuoteSource`]
//! trait so tests can substitute deterministic values.

pub mod generator;
pub mod listing;
pub mod service;

pub use generator::{FixedQuoteSource, QuoteSource, RandomQuoteSource};
pub use listing::{band_for, SymbolBand, LISTING};
pub use service::{ExchangeService, UNKNOWN_SYMBOL};
