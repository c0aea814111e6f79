//! Error types for the storefront service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Storefront Error Enum ==
/// Unified error type for the storefront service.
///
/// Cache misses are not errors inside the cache itself; `NotFound` only
/// appears once a miss reaches the HTTP surface.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Requested product is not cached or not listed
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Durable storage rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = match &self {
            StorefrontError::NotFound(_) => StatusCode::NOT_FOUND,
            StorefrontError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StorefrontError::Storage(_)
            | StorefrontError::Io(_)
            | StorefrontError::Serialization(_)
            | StorefrontError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Extractor Rejections ==
// Malformed bodies and query strings get the same JSON error body as
// every other failure instead of axum's plain-text rejection.
impl From<JsonRejection> for StorefrontError {
    fn from(rejection: JsonRejection) -> Self {
        StorefrontError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for StorefrontError {
    fn from(rejection: QueryRejection) -> Self {
        StorefrontError::InvalidRequest(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the storefront service.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = StorefrontError::NotFound("ring-1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = StorefrontError::InvalidRequest("empty id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_rejection_becomes_json_400() {
        use axum::extract::{FromRequestParts, Query};
        use axum::http::Request;
        use std::collections::HashMap;

        let (mut parts, _) = Request::builder()
            .uri("/products/a/reviews?count=abc")
            .body(())
            .unwrap()
            .into_parts();
        let rejection = Query::<HashMap<String, u32>>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();

        let err = StorefrontError::from(rejection);
        assert!(matches!(err, StorefrontError::InvalidRequest(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
    }

    #[test]
    fn test_serde_error_converts() {
        let err: StorefrontError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, StorefrontError::Serialization(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
