//! API Routes
//!
//! Configures the Axum router with all storefront endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_products_handler, clear_recently_viewed_handler, get_product_handler, health_handler,
    list_recently_viewed_handler, product_cached_handler, product_rating_handler,
    product_reviews_handler, put_product_handler, record_recently_viewed_handler,
    remove_recently_viewed_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (the storefront is served from its own host)
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/products", delete(clear_products_handler))
        .route(
            "/products/:id",
            put(put_product_handler).get(get_product_handler),
        )
        .route("/products/:id/cached", get(product_cached_handler))
        .route("/products/:id/reviews", get(product_reviews_handler))
        .route("/products/:id/rating", get(product_rating_handler))
        .route(
            "/recently-viewed",
            get(list_recently_viewed_handler)
                .post(record_recently_viewed_handler)
                .delete(clear_recently_viewed_handler),
        )
        .route(
            "/recently-viewed/:id",
            delete(remove_recently_viewed_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
