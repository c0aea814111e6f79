//! Cache Module
//!
//! Bounded in-memory product cache with least-recently-used eviction.
//! Used to skip repeat product fetches within a single session; a miss is
//! always recoverable by going back to the authoritative source.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::RecencyOrder;
pub use stats::{CacheStats, WriteOutcome};
pub use store::ProductCache;

// == Public Constants ==
/// Default number of resident products
pub const DEFAULT_CAPACITY: usize = 50;
