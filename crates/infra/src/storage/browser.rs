use super::{KeyValueStorage, StorageError};

/// The browser's `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Attach to `window.localStorage`.
    pub fn local() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window object".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("localStorage access denied: {e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("getItem({key}) failed: {e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("setItem({key}) failed: {e:?}")))
    }
}
