//! Recently Viewed Module
//!
//! A short, durable, most-recent-first list of product summaries. Unlike
//! the product cache it survives restarts, and it is bounded by truncation
//! rather than eviction. Storage failures never reach the caller.

mod list;
mod storage;

pub use list::{RecentlyViewed, MAX_RECENTLY_VIEWED, RECENTLY_VIEWED_SLOT};
pub use storage::{DurableStore, FileStore, MemoryStore};
