//! Durable slot storage
//!
//! A slot is a named string value, typically a JSON document. Backends are
//! async so file I/O never runs on a runtime worker thread.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::Result;

// == Durable Store ==
/// Port for per-slot durable storage backends.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Returns the slot's contents, or None if it was never written.
    async fn load(&self, slot: &str) -> Result<Option<String>>;
    /// Replaces the slot's contents.
    async fn save(&self, slot: &str, payload: &str) -> Result<()>;
    /// Deletes the slot. Removing a missing slot is not an error.
    async fn remove(&self, slot: &str) -> Result<()>;
}

// == File Store ==
/// Stores each slot as a file under a directory.
///
/// The directory is created on first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File backing `slot`: `storefront:recently-viewed` becomes
    /// `storefront_recently-viewed.json`.
    pub fn path_for(&self, slot: &str) -> PathBuf {
        let name: String = slot
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

#[async_trait]
impl DurableStore for FileStore {
    async fn load(&self, slot: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(slot)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, slot: &str, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;

        // Write then rename so a crash never leaves a half-written slot
        let path = self.path_for(slot);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<()> {
        match fs::remove_file(self.path_for(slot)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// == Memory Store ==
/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DurableStore for MemoryStore {
    async fn load(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn save(&self, slot: &str, payload: &str) -> Result<()> {
        self.slots
            .write()
            .await
            .insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<()> {
        self.slots.write().await.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    #[test]
    fn test_path_for_sanitizes_slot() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.path_for("storefront:recently-viewed"),
            PathBuf::from("/data/storefront_recently-viewed.json")
        );
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested"));

        assert_eq!(store.load("slot").await.unwrap(), None);

        store.save("slot", "[1,2,3]").await.unwrap();
        assert_eq!(store.load("slot").await.unwrap(), Some("[1,2,3]".to_string()));

        store.save("slot", "[]").await.unwrap();
        assert_eq!(store.load("slot").await.unwrap(), Some("[]".to_string()));
        assert!(!store.path_for("slot").with_extension("json.tmp").exists());

        store.remove("slot").await.unwrap();
        assert_eq!(store.load("slot").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_remove_missing_is_ok() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert!(store.remove("never-written").await.is_ok());
    }

    #[tokio::test]
    async fn test_file_store_save_into_file_path_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = FileStore::new(&blocker);
        let result = store.save("slot", "[]").await;
        assert!(matches!(result, Err(StorefrontError::Io(_))));
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();

        assert_eq!(store.load("slot").await.unwrap(), None);
        store.save("slot", "value").await.unwrap();
        assert_eq!(store.load("slot").await.unwrap(), Some("value".to_string()));
        store.remove("slot").await.unwrap();
        assert_eq!(store.load("slot").await.unwrap(), None);
    }
}
