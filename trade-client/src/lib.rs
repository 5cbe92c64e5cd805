//! Trading client for the mock stock service
//!
//! Calls the service's check/buy/sell endpoints, renders the results as
//! plain text, and mirrors a local holdings snapshot to a JSON file. The
//! local portfolio is a convenience cache only; the service keeps no
//! ledger for it to agree with.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod portfolio;
pub mod render;
pub mod store;

/// Re-export important types
pub use client::TradingClient;
pub use endpoints::EndpointMap;
pub use error::{Error, Result};
pub use portfolio::{Holding, Portfolio};
pub use store::PortfolioStore;
