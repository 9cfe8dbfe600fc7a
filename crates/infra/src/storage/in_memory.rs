use std::collections::HashMap;
use std::sync::RwLock;

use super::{KeyValueStorage, StorageError};

/// In-memory key-value storage.
///
/// Intended for tests/dev. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `value` under `key`.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self {
            items: RwLock::new(items),
        }
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.read().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
