use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::file::{self, StorageError};
use crate::collection::types::{HeroCollection, HeroRecord};

/// Shared, concurrency-safe access to the hero collection and its backing
/// file.
///
/// Readers clone an `Arc` snapshot and keep working on it even while a
/// replace is running; a snapshot is either entirely before or entirely
/// after a given write. Writers queue on the write gate, so one save at a
/// time touches the backing file, and the cache only moves forward after
/// the file write succeeded. Once `replace` returns, every later read
/// observes at least that state.
pub struct HeroStore {
    path: PathBuf,
    /// `None` until the first access triggers the lazy load.
    cache: RwLock<Option<Arc<HeroCollection>>>,
    /// Serializes replaces; held across the file write.
    write_gate: Mutex<()>,
}

impl HeroStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: RwLock::new(None),
            write_gate: Mutex::new(()),
        }
    }

    /// Returns a consistent snapshot of the collection, loading the backing
    /// file on first access.
    ///
    /// The load runs once: a failed or empty load is cached as the empty
    /// collection rather than retried on every read. Only the next
    /// successful replace moves the cache after that.
    pub async fn snapshot(&self) -> Arc<HeroCollection> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                return Arc::clone(cached);
            }
        }

        let mut slot = self.cache.write().await;
        // Another request may have finished the load while we waited.
        if let Some(cached) = slot.as_ref() {
            return Arc::clone(cached);
        }

        let loaded = Arc::new(file::load_collection(&self.path));
        tracing::info!(
            "Loaded {} hero record(s) from {}",
            loaded.len(),
            self.path.display()
        );
        *slot = Some(Arc::clone(&loaded));
        loaded
    }

    /// Replaces the whole collection: persists the new records, then swaps
    /// the cached snapshot.
    ///
    /// Readers are only blocked for the instant of the swap, never for the
    /// file I/O. On a failed save both the cache and the backing file keep
    /// their previous state and the error is returned to the caller.
    pub async fn replace(&self, records: Vec<HeroRecord>) -> Result<(), StorageError> {
        let _gate = self.write_gate.lock().await;

        let next = HeroCollection::new(records);
        file::save_collection(&self.path, &next)?;

        *self.cache.write().await = Some(Arc::new(next));
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
