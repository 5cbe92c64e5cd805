//! Common types and utilities for the papertrade workspace
//!
//! This library contains the wire models, money helpers, and error types
//! shared by the mock trading service and the trading client.

pub mod error;
pub mod model;
pub mod money;

/// Re-export important types
pub use error::{Error, Result};
pub use money::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
