//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};

use crate::cache::DEFAULT_CAPACITY;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of products the in-memory cache holds
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Directory for the durable recently-viewed slot; None keeps it in memory
    pub data_dir: Option<PathBuf>,
    /// Reference instant review dates are counted back from
    pub review_anchor: DateTime<Utc>,
}

/// Default review anchor: 2024-06-01T12:00:00Z.
pub fn default_review_anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Product cache capacity (default: 50)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DATA_DIR` - Directory for durable storage (default: unset, in-memory)
    /// - `REVIEW_ANCHOR` - RFC 3339 anchor for review dates (default: 2024-06-01T12:00:00Z)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            data_dir: env::var("DATA_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            review_anchor: env::var("REVIEW_ANCHOR")
                .ok()
                .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(default_review_anchor),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            server_port: 3000,
            data_dir: None,
            review_anchor: default_review_anchor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.server_port, 3000);
        assert!(config.data_dir.is_none());
        assert_eq!(config.review_anchor.to_rfc3339(), "2024-06-01T12:00:00+00:00");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
        env::remove_var("DATA_DIR");
        env::remove_var("REVIEW_ANCHOR");

        let config = Config::from_env();
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.server_port, 3000);
        assert!(config.data_dir.is_none());
        assert_eq!(config.review_anchor, default_review_anchor());
    }
}
