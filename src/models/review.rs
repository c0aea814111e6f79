//! Synthesized review record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated product review. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: String,
    pub reviewer_name: String,
    /// Star rating, 4 or 5
    pub rating: u8,
    pub review_text: String,
    pub review_title: String,
    pub created_at: DateTime<Utc>,
    pub verified_purchase: bool,
}
