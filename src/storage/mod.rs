mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Backing medium for the data store. One serialized JSON document per
/// collection, addressed by a short key such as `courses`.
///
/// `load` distinguishes "nothing stored yet" (`Ok(None)`) from a medium
/// failure (`Err`) so the store can tell an empty slot apart from a broken
/// one.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the whole document for `key`.
    async fn store(&self, key: &str, document: &str) -> Result<(), StorageError>;
}
