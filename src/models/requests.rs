//! Request DTOs for the storefront API
//!
//! Defines query strings and bodies accepted by the handlers. Product records
//! cached through `PUT /products/:id` are opaque JSON and have no DTO.

use serde::Deserialize;

/// Query string for `GET /products/:id/reviews`
///
/// When `count` is absent the product's generated review count is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewsQuery {
    #[serde(default)]
    pub count: Option<usize>,
}

/// Validates a product id taken from a request path.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_product_id(id: &str) -> Option<String> {
    if id.trim().is_empty() {
        return Some("Product id cannot be empty".to_string());
    }
    if id.chars().count() > 256 {
        return Some("Product id exceeds maximum length of 256 characters".to_string());
    }
    None
}
