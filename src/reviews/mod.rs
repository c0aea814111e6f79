//! Reviews Module
//!
//! Deterministic synthesis of ratings, review counts and review records
//! from a product id. Nothing is random at call time and nothing is stored:
//! the same id yields the same output on every render and every reload.

mod catalog;
mod generator;
mod hash;

#[cfg(test)]
mod property_tests;

pub use generator::{ReviewGenerator, MAX_DISPLAYED_REVIEWS};
pub use hash::{bounded, seed_hash};
