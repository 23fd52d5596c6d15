// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Default Google Places web service root
pub const DEFAULT_GMAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps / Places API key. `None` leaves the search route unconfigured.
    pub gmaps_key: Option<String>,

    /// Generic web search API key (optional)
    pub search_key: Option<String>,

    /// Custom search engine identifier (optional)
    pub search_engine_id: Option<String>,

    /// Root URL of the Places web service
    pub gmaps_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            gmaps_key: optional_var("GMAPS_KEY"),

            search_key: optional_var("SEARCH_KEY"),

            search_engine_id: optional_var("SEARCH_ENGINE_ID"),

            gmaps_base_url: env::var("GMAPS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GMAPS_BASE_URL.to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Missing credentials only warn, the server still starts
    pub fn validate(&self) -> Result<(), String> {
        if self.server_address.is_empty() {
            return Err("SERVER_ADDRESS must not be empty".to_string());
        }

        if self.gmaps_key.is_none() {
            log::warn!("GMAPS_KEY not configured - /api/search-places will answer 500");
        }

        if self.search_key.is_none() || self.search_engine_id.is_none() {
            log::warn!("SEARCH_KEY / SEARCH_ENGINE_ID not configured");
        }

        Ok(())
    }
}

/// Treat unset and blank variables the same way
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
