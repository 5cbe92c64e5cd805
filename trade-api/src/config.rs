//! Application configuration

use std::env;

/// Application configuration
pub struct AppConfig {
    /// API port used when no listen address is given on the command line
    pub port: u16,
}

impl AppConfig {
    /// Create a new configuration from environment variables
    pub fn new() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
