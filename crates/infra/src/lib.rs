//! Infrastructure layer: storage backends, the invoice store, and the entry
//! workflow service that ties validation, persistence and refresh together.

pub mod storage;
pub mod store;
pub mod workflow;

pub use storage::{InMemoryStorage, KeyValueStorage, StorageError};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
pub use store::{DEFAULT_STORAGE_KEY, InvoiceStore, PersistenceReadError, StoreError};
pub use workflow::{InvoiceLog, RefreshHook, WorkflowError};
