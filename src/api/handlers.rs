//! API Handlers
//!
//! HTTP request handlers for each storefront endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::ProductCache;
use crate::config::Config;
use crate::error::{Result, StorefrontError};
use crate::models::{
    requests::validate_product_id, CachedProductResponse, ClearResponse, ExistsResponse,
    HealthResponse, ProductSummary, RatingSummary, ReviewRecord, ReviewsQuery, SetResponse,
    StatsResponse,
};
use crate::recent::{FileStore, MemoryStore, RecentlyViewed};
use crate::reviews::ReviewGenerator;

/// Application state shared across all handlers.
///
/// Built once at startup and handed to the router; tests build their own.
#[derive(Clone)]
pub struct AppState {
    /// Product records keyed by product id
    pub products: Arc<RwLock<ProductCache<Value>>>,
    /// Durable recently viewed list
    pub recently_viewed: Arc<RwLock<RecentlyViewed>>,
    /// Review synthesizer
    pub reviews: ReviewGenerator,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        products: ProductCache<Value>,
        recently_viewed: RecentlyViewed,
        reviews: ReviewGenerator,
    ) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            recently_viewed: Arc::new(RwLock::new(recently_viewed)),
            reviews,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Without a data directory the recently viewed list lives in memory.
    pub fn from_config(config: &Config) -> Self {
        let recently_viewed = match &config.data_dir {
            Some(dir) => {
                info!("Recently viewed list stored under {}", dir.display());
                RecentlyViewed::new(Box::new(FileStore::new(dir)))
            }
            None => {
                info!("No DATA_DIR set, recently viewed list kept in memory");
                RecentlyViewed::new(Box::new(MemoryStore::new()))
            }
        };

        Self::new(
            ProductCache::new(config.cache_capacity),
            recently_viewed,
            ReviewGenerator::new(config.review_anchor),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn check_id(id: &str) -> Result<()> {
    match validate_product_id(id) {
        Some(error_msg) => Err(StorefrontError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

/// Handler for PUT /products/:id
///
/// Caches the request body as the product's record. The response says
/// whether the write inserted, refreshed, or displaced another product.
pub async fn put_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<SetResponse>> {
    check_id(&id)?;
    let Json(product) = payload?;

    let mut products = state.products.write().await;
    let outcome = products.set(id.clone(), product);

    Ok(Json(SetResponse::new(id, &outcome)))
}

/// Handler for GET /products/:id
///
/// A hit marks the product most recently used; a miss is a 404 and the
/// caller falls back to its product source.
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CachedProductResponse>> {
    // Write lock: a hit updates recency and stats
    let mut products = state.products.write().await;
    let entry = products
        .get_entry(&id)
        .ok_or_else(|| StorefrontError::NotFound(format!("product '{}' is not cached", id)))?;

    Ok(Json(CachedProductResponse {
        product: entry.value.clone(),
        cached_at: entry.cached_at,
        age_ms: entry.age_ms(),
        id,
    }))
}

/// Handler for GET /products/:id/cached
pub async fn product_cached_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ExistsResponse> {
    let products = state.products.read().await;
    let cached = products.has(&id);

    Json(ExistsResponse { id, cached })
}

/// Handler for DELETE /products
pub async fn clear_products_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut products = state.products.write().await;
    let cleared = products.size();
    products.clear();
    info!("Product cache cleared ({} entries)", cleared);

    Json(ClearResponse::new("products", cleared))
}

/// Handler for GET /products/:id/reviews
///
/// `count` defaults to the product's generated review count; either way at
/// most 20 reviews come back.
pub async fn product_reviews_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: std::result::Result<Query<ReviewsQuery>, QueryRejection>,
) -> Result<Json<Vec<ReviewRecord>>> {
    check_id(&id)?;
    let Query(query) = query?;

    let count = query
        .count
        .unwrap_or_else(|| state.reviews.review_count_for(&id) as usize);

    Ok(Json(state.reviews.reviews_for(&id, count)))
}

/// Handler for GET /products/:id/rating
pub async fn product_rating_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RatingSummary>> {
    check_id(&id)?;

    Ok(Json(state.reviews.summary_for(&id)))
}

/// Handler for GET /recently-viewed
pub async fn list_recently_viewed_handler(
    State(state): State<AppState>,
) -> Json<Vec<ProductSummary>> {
    let recently_viewed = state.recently_viewed.read().await;
    Json(recently_viewed.list().await)
}

/// Handler for POST /recently-viewed
///
/// Records the product and returns the updated list.
pub async fn record_recently_viewed_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductSummary>, JsonRejection>,
) -> Result<Json<Vec<ProductSummary>>> {
    let Json(product) = payload?;
    if let Some(error_msg) = product.validate() {
        return Err(StorefrontError::InvalidRequest(error_msg));
    }

    // Write lock serializes the load-modify-save cycle
    let recently_viewed = state.recently_viewed.write().await;
    recently_viewed.record(product).await;

    Ok(Json(recently_viewed.list().await))
}

/// Handler for DELETE /recently-viewed/:id
pub async fn remove_recently_viewed_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ProductSummary>>> {
    let recently_viewed = state.recently_viewed.write().await;
    if !recently_viewed.remove(&id).await {
        return Err(StorefrontError::NotFound(format!(
            "product '{}' is not in the recently viewed list",
            id
        )));
    }

    Ok(Json(recently_viewed.list().await))
}

/// Handler for DELETE /recently-viewed
pub async fn clear_recently_viewed_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let recently_viewed = state.recently_viewed.write().await;
    let cleared = recently_viewed.clear().await;

    Json(ClearResponse::new("recently viewed products", cleared))
}

/// Handler for GET /stats
///
/// Returns product cache activity and fill.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let products = state.products.read().await;
    Json(StatsResponse::from(products.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
