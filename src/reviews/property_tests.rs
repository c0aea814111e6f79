//! Property-Based Tests for Reviews Module
//!
//! Checks purity, range bounds and stability under count changes.

use proptest::prelude::*;

use crate::reviews::{bounded, seed_hash, ReviewGenerator, MAX_DISPLAYED_REVIEWS};

fn product_id_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,32}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Same input, same output: hash and every generator operation are pure.
    #[test]
    fn prop_generator_is_pure(id in product_id_strategy(), count in 0usize..40) {
        let generator = ReviewGenerator::default();

        prop_assert_eq!(seed_hash(&id), seed_hash(&id));
        prop_assert_eq!(generator.review_count_for(&id), generator.review_count_for(&id));
        prop_assert_eq!(generator.rating_for(&id), generator.rating_for(&id));
        prop_assert_eq!(generator.reviews_for(&id, count), generator.reviews_for(&id, count));

        let first = serde_json::to_string(&generator.reviews_for(&id, count)).unwrap();
        let second = serde_json::to_string(&generator.reviews_for(&id, count)).unwrap();
        prop_assert_eq!(first, second);
    }

    // Every bounded value lands inside its inclusive range.
    #[test]
    fn prop_values_in_range(id in product_id_strategy(), min in 0u32..1000, span in 0u32..1000) {
        let generator = ReviewGenerator::default();
        let value = bounded(&id, min, min + span);

        prop_assert!(value >= min && value <= min + span);
        prop_assert!((15..=100).contains(&generator.review_count_for(&id)));
        prop_assert!((10..=50).contains(&generator.listing_review_count_for(&id)));
        prop_assert!((4.0..=5.0).contains(&generator.rating_for(&id)));
        prop_assert!(matches!(generator.star_rating_for(&id), 4 | 5));
    }

    // Asking for more reviews never changes the ones already shown.
    #[test]
    fn prop_stable_under_count_change(
        id in product_id_strategy(),
        small in 0usize..25,
        extra in 0usize..25
    ) {
        let generator = ReviewGenerator::default();
        let fewer = generator.reviews_for(&id, small);
        let more = generator.reviews_for(&id, small + extra);

        prop_assert!(fewer.len() <= more.len());
        for (i, review) in fewer.iter().enumerate() {
            prop_assert_eq!(review, &more[i]);
        }
    }

    // Length is min(count, 20) and dates are strictly descending.
    #[test]
    fn prop_length_and_order(id in product_id_strategy(), count in 0usize..100) {
        let reviews = ReviewGenerator::default().reviews_for(&id, count);

        prop_assert_eq!(reviews.len(), count.min(MAX_DISPLAYED_REVIEWS));
        for pair in reviews.windows(2) {
            prop_assert!(pair[0].created_at > pair[1].created_at);
        }
    }
}
