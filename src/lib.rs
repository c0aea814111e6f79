//! Gem Storefront - storefront support service for a jewelry shop
//!
//! Provides a bounded LRU product cache, deterministic review synthesis and
//! a durable recently-viewed list, served over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod recent;
pub mod reviews;

pub use api::AppState;
pub use cache::ProductCache;
pub use config::Config;
pub use recent::RecentlyViewed;
pub use reviews::ReviewGenerator;
