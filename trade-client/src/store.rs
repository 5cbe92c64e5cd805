//! JSON-file persistence for the portfolio
//!
//! Holdings persist as a bare JSON array under the `stockPortfolio` key,
//! stored as a file. A missing or unreadable file means an empty
//! portfolio, never a failure.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::portfolio::Portfolio;

/// Default file name; doubles as the storage key for the holdings array
pub const STORE_FILE: &str = "stockPortfolio.json";

/// File-backed holdings store
pub struct PortfolioStore {
    path: PathBuf,
}

impl PortfolioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the default name in the current directory
    pub fn default_location() -> Self {
        Self::new(STORE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load holdings; a missing, unreadable, or corrupt file yields an
    /// empty portfolio
    pub fn load(&self) -> Portfolio {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Portfolio::new(),
            Err(e) => {
                warn!("Failed to read portfolio store {}: {}", self.path.display(), e);
                return Portfolio::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                warn!(
                    "Ignoring corrupt portfolio store {}: {}",
                    self.path.display(),
                    e
                );
                Portfolio::new()
            }
        }
    }

    /// Persist the holdings array, overwriting the previous contents
    pub fn save(&self, portfolio: &Portfolio) -> Result<()> {
        let json = serde_json::to_string_pretty(portfolio).map_err(common::Error::from)?;
        fs::write(&self.path, json).map_err(common::Error::from)?;
        Ok(())
    }
}
