use std::path::Path;

use thiserror::Error;

use crate::collection::types::HeroCollection;

/// Failure while persisting the collection to the backing file.
///
/// Load failures never surface as errors (see [`load_collection`]); only
/// save failures do, and the caller reports them once to the client that
/// triggered the write.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write backing file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads the backing file and parses it as a JSON array of records.
///
/// Missing file, unreadable file, and malformed content all yield the empty
/// collection. The failure is logged, not surfaced: the service is expected
/// to come up before a backing file was ever written, and a corrupt file
/// must not take reads down with it.
pub fn load_collection(path: &Path) -> HeroCollection {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!("No readable backing file at {}: {}", path.display(), err);
            return HeroCollection::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(collection) => collection,
        Err(err) => {
            tracing::warn!(
                "Ignoring malformed backing file {}: {}",
                path.display(),
                err
            );
            HeroCollection::default()
        }
    }
}

/// Serializes the collection and replaces the backing file.
///
/// Output is pretty-printed JSON (2-space indent, UTF-8, non-ASCII
/// unescaped). The bytes are written to `<path>.tmp` first and renamed over
/// the target, so the previously persisted content survives any failure
/// before the rename.
pub fn save_collection(path: &Path, collection: &HeroCollection) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec_pretty(collection)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, &bytes)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
