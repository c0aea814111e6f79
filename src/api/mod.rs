//! API Module
//!
//! HTTP handlers and routing for the storefront REST API.
//!
//! # Endpoints
//! - `PUT /products/:id` - Cache a product record
//! - `GET /products/:id` - Read a cached product record
//! - `GET /products/:id/cached` - Check whether a product is cached
//! - `DELETE /products` - Drop every cached product
//! - `GET /products/:id/reviews` - Generated reviews
//! - `GET /products/:id/rating` - Generated rating figures
//! - `GET|POST|DELETE /recently-viewed` - Durable recently viewed list
//! - `DELETE /recently-viewed/:id` - Forget one recently viewed product
//! - `GET /stats` - Product cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
