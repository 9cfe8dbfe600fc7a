//! Key-value storage backends (mechanics only).
//!
//! The invoice store persists everything under a single key, so the backend
//! contract is the browser `localStorage` surface and nothing more:
//! get and set a string value by string key.

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use thiserror::Error;

mod in_memory;
pub use in_memory::InMemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (no window, storage disabled, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The key cannot be represented by this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal lock poisoning.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Synchronous string key-value storage.
///
/// Methods take `&self`; backends use interior mutability where needed so one
/// storage handle can be shared between the store and its readers.
pub trait KeyValueStorage {
    /// Returns `None` when nothing is stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
