//! Domain records and the DTOs used by the HTTP API
//!
//! Storefront records (`ProductSummary`, `ReviewRecord`) serialize in
//! camelCase so stored and served JSON keeps the storefront's field names.

pub mod product;
pub mod requests;
pub mod responses;
pub mod review;

// Re-export commonly used types
pub use product::ProductSummary;
pub use requests::ReviewsQuery;
pub use responses::{
    CachedProductResponse, ClearResponse, ErrorResponse, ExistsResponse, HealthResponse,
    RatingSummary, SetResponse, StatsResponse,
};
pub use review::ReviewRecord;
