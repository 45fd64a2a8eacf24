//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Load the example courses at startup
    pub seed_data: bool,
    /// Answer rejected creations with 412 instead of 400
    pub strict_validation: bool,
    /// Prefix for `Location` headers, e.g. `http://localhost:3000`
    pub public_base_url: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SEED_DATA` - Load example courses (default: true)
    /// - `STRICT_VALIDATION` - 412 on rejected creations (default: false)
    /// - `PUBLIC_BASE_URL` - Absolute prefix for Location headers (default: unset)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            seed_data: env::var("SEED_DATA")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            strict_validation: env::var("STRICT_VALIDATION")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            seed_data: true,
            strict_validation: false,
            public_base_url: None,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
