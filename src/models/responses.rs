//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, WriteOutcome};

/// Response body for `GET /products/:id`
#[derive(Debug, Clone, Serialize)]
pub struct CachedProductResponse {
    /// The requested product id
    pub id: String,
    /// The cached product record, as it was stored
    pub product: Value,
    /// When the record was written to the cache
    pub cached_at: DateTime<Utc>,
    /// Milliseconds since `cached_at`
    pub age_ms: i64,
}

/// Response body for `PUT /products/:id`
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The product id that was cached
    pub id: String,
    /// One of `inserted`, `overwritten`, `displaced`
    pub outcome: &'static str,
    /// Product pushed out to make room, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<String>,
}

impl SetResponse {
    pub fn new(id: impl Into<String>, outcome: &WriteOutcome) -> Self {
        let id = id.into();
        let label = match outcome {
            WriteOutcome::Inserted => "inserted",
            WriteOutcome::Overwritten => "overwritten",
            WriteOutcome::Displaced { .. } => "displaced",
        };
        Self {
            message: format!("Product '{}' cached successfully", id),
            id,
            outcome: label,
            evicted: outcome.evicted().map(str::to_string),
        }
    }
}

/// Response body for `GET /products/:id/cached`
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    pub id: String,
    pub cached: bool,
}

/// Response body for the clear endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(what: &str, cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} {}", cleared, what),
            cleared,
        }
    }
}

/// Response body for the stats endpoint (`GET /stats`)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub overwrites: u64,
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured capacity
    pub capacity: usize,
    /// hits / (hits + misses); null before the first lookup
    pub hit_rate: Option<f64>,
    /// total_entries / capacity
    pub fill_ratio: f64,
    /// evictions / capacity
    pub turnover: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            inserts: stats.inserts,
            overwrites: stats.overwrites,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            hit_rate: stats.hit_rate(),
            fill_ratio: stats.fill_ratio(),
            turnover: stats.turnover(),
        }
    }
}

/// Generated rating figures shown on product cards and detail pages.
///
/// Carries both count conventions (detail page and listing tile) and both
/// rating conventions (decimal and whole stars).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub product_id: String,
    /// Decimal rating in [4.0, 5.0]
    pub rating: f64,
    /// Review count in [15, 100]
    pub review_count: u32,
    /// Whole-star rating, 4 or 5
    pub star_rating: u8,
    /// Review count in [10, 50] used by listing tiles
    pub listing_review_count: u32,
}

/// Response body for the health endpoint (`GET /health`)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
