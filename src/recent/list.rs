//! Recently viewed list

use tracing::{debug, warn};

use crate::error::{Result, StorefrontError};
use crate::models::ProductSummary;
use crate::recent::DurableStore;

/// Storage slot holding the JSON-encoded list
pub const RECENTLY_VIEWED_SLOT: &str = "storefront:recently-viewed";

/// Maximum number of remembered products
pub const MAX_RECENTLY_VIEWED: usize = 20;

// == Recently Viewed ==
/// Most-recent-first list of viewed products, deduplicated by id.
///
/// Every operation is best effort: read failures look like an empty list
/// and write failures are logged and dropped.
pub struct RecentlyViewed {
    store: Box<dyn DurableStore>,
}

impl RecentlyViewed {
    pub fn new(store: Box<dyn DurableStore>) -> Self {
        Self { store }
    }

    // == List ==
    /// Current list, most recent first. Empty on any storage or parse failure.
    pub async fn list(&self) -> Vec<ProductSummary> {
        match self.load().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "failed to read recently viewed products");
                Vec::new()
            }
        }
    }

    // == Record ==
    /// Moves `product` to the front, dropping any older entry with the same
    /// id, then trims the list to [`MAX_RECENTLY_VIEWED`].
    pub async fn record(&self, product: ProductSummary) {
        let mut items = self.list().await;
        items.retain(|p| p.id != product.id);
        items.insert(0, product);
        items.truncate(MAX_RECENTLY_VIEWED);
        self.persist(&items).await;
    }

    // == Remove ==
    /// Removes the product with `id`. Returns whether it was listed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut items = self.list().await;
        let before = items.len();
        items.retain(|p| p.id != id);
        if items.len() == before {
            return false;
        }
        self.persist(&items).await;
        true
    }

    // == Clear ==
    /// Forgets every product. Returns how many were listed.
    pub async fn clear(&self) -> usize {
        let count = self.list().await.len();
        if let Err(e) = self.store.remove(RECENTLY_VIEWED_SLOT).await {
            warn!(error = %e, "failed to clear recently viewed products");
        }
        count
    }

    async fn load(&self) -> Result<Vec<ProductSummary>> {
        match self.store.load(RECENTLY_VIEWED_SLOT).await? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, items: &[ProductSummary]) {
        let saved = match serde_json::to_string(items) {
            Ok(payload) => self.store.save(RECENTLY_VIEWED_SLOT, &payload).await,
            Err(e) => Err(StorefrontError::from(e)),
        };

        match saved {
            Ok(()) => debug!(count = items.len(), "saved recently viewed products"),
            Err(e) => warn!(error = %e, "failed to save recently viewed products"),
        }
    }
}

impl std::fmt::Debug for RecentlyViewed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentlyViewed").finish_non_exhaustive()
    }
}
