//! Condensed product summary kept in the recently-viewed list

use serde::{Deserialize, Serialize};

// == Product Summary ==
/// Just enough of a product to render a "recently viewed" tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Pre-discount price, when the product is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

// == Construction and Validation ==
impl ProductSummary {
    /// Creates a summary with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: None,
            rating: None,
            review_count: None,
        }
    }

    /// Validates the summary before it is recorded.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            return Some("Product id cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        None
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserialize_camel_case() {
        let json = r#"{"id":"ring-1","name":"Halo Ring","price":1299.0,"originalPrice":1499.0,"reviewCount":42}"#;
        let summary: ProductSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, "ring-1");
        assert_eq!(summary.original_price, Some(1499.0));
        assert_eq!(summary.review_count, Some(42));
        assert!(summary.image.is_none());
    }

    #[test]
    fn test_summary_skips_missing_optionals() {
        let json = serde_json::to_string(&ProductSummary::new("ring-1", "Halo Ring", 10.0)).unwrap();
        assert!(!json.contains("originalPrice"));
        assert!(!json.contains("image"));
    }

    #[test]
    fn test_validate() {
        assert!(ProductSummary::new("ring-1", "Halo", 10.0).validate().is_none());
        assert!(ProductSummary::new("  ", "Halo", 10.0).validate().is_some());
        assert!(ProductSummary::new("ring-1", "Halo", -1.0).validate().is_some());
        assert!(ProductSummary::new("ring-1", "Halo", f64::NAN).validate().is_some());
    }
}
