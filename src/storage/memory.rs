use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{StorageBackend, StorageError};

/// In-memory backend. Nothing survives the process; used by tests and
/// ephemeral runs.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable("storage mutex poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    async fn store(&self, key: &str, document: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable("storage mutex poisoned".to_string()))?;
        slots.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
