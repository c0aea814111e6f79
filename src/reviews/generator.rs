//! Review Generator
//!
//! Turns a product id into a stable rating, review counts and a list of
//! review records. Every value comes from `seed_hash` over the id plus a
//! field-specific suffix so different fields of one product diverge.

use chrono::{DateTime, Duration, Utc};

use crate::config::default_review_anchor;
use crate::models::{RatingSummary, ReviewRecord};
use crate::reviews::catalog::{REVIEWER_NAMES, REVIEW_TEXTS, REVIEW_TITLES};
use crate::reviews::hash::{bounded, pick};

/// Display cap for generated reviews
pub const MAX_DISPLAYED_REVIEWS: usize = 20;

/// Whole days between consecutive reviews' date buckets.
const DAYS_PER_REVIEW: i64 = 7;
const SECONDS_PER_DAY: u32 = 86_400;

// == Review Generator ==
/// Deterministic review synthesizer.
///
/// `anchor` is the instant review dates count back from. Keeping it fixed
/// (rather than "now") is what makes output identical across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewGenerator {
    anchor: DateTime<Utc>,
}

impl ReviewGenerator {
    pub fn new(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    // == Review Count ==
    /// Review count shown on product detail pages, in [15, 100].
    pub fn review_count_for(&self, product_id: &str) -> u32 {
        bounded(&format!("{product_id}review"), 15, 100)
    }

    // == Listing Review Count ==
    /// Review count shown on listing tiles, in [10, 50].
    pub fn listing_review_count_for(&self, product_id: &str) -> u32 {
        bounded(&format!("{product_id}reviews"), 10, 50)
    }

    // == Rating ==
    /// Decimal rating in [4.0, 5.0] with one decimal place.
    pub fn rating_for(&self, product_id: &str) -> f64 {
        let tenths = bounded(&format!("{product_id}rating"), 40, 50);
        f64::from(tenths) / 10.0
    }

    // == Star Rating ==
    /// Whole-star rating, either 4 or 5.
    pub fn star_rating_for(&self, product_id: &str) -> u8 {
        bounded(&format!("{product_id}stars"), 4, 5) as u8
    }

    // == Summary ==
    pub fn summary_for(&self, product_id: &str) -> RatingSummary {
        RatingSummary {
            product_id: product_id.to_string(),
            rating: self.rating_for(product_id),
            review_count: self.review_count_for(product_id),
            star_rating: self.star_rating_for(product_id),
            listing_review_count: self.listing_review_count_for(product_id),
        }
    }

    // == Reviews ==
    /// Returns `min(count, 20)` reviews, newest first.
    ///
    /// Record `i` depends only on `(product_id, i)`, and dates fall strictly
    /// further back as `i` grows, so asking for more reviews only appends.
    pub fn reviews_for(&self, product_id: &str, count: usize) -> Vec<ReviewRecord> {
        let mut reviews: Vec<ReviewRecord> = (0..count.min(MAX_DISPLAYED_REVIEWS))
            .map(|index| self.review_at(product_id, index))
            .collect();

        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    fn review_at(&self, product_id: &str, index: usize) -> ReviewRecord {
        let seed = format!("{product_id}-{index}");

        // Each record owns a 7-day bucket; jitter plus time of day stays
        // inside it, keeping dates strictly decreasing by index.
        let jitter_days = i64::from(bounded(&format!("{seed}date"), 0, 6));
        let days_ago = DAYS_PER_REVIEW * index as i64 + jitter_days + 1;
        let seconds_ago = i64::from(bounded(&format!("{seed}time"), 0, SECONDS_PER_DAY - 1));
        let created_at = self.anchor - Duration::days(days_ago) - Duration::seconds(seconds_ago);

        ReviewRecord {
            id: format!("{product_id}-review-{index}"),
            reviewer_name: pick(REVIEWER_NAMES, &format!("{seed}name")).to_string(),
            rating: bounded(&format!("{seed}rating"), 4, 5) as u8,
            review_text: pick(REVIEW_TEXTS, &format!("{seed}text")).to_string(),
            review_title: pick(REVIEW_TITLES, &format!("{seed}title")).to_string(),
            created_at,
            // Roughly four in five reviews are verified
            verified_purchase: bounded(&format!("{seed}verified"), 0, 9) < 8,
        }
    }
}

impl Default for ReviewGenerator {
    fn default() -> Self {
        Self::new(default_review_anchor())
    }
}
