//! Durable invoice list over a single storage key.
//!
//! The whole list is one JSON array. Every mutation is a read-modify-write of
//! that blob; there is exactly one writer, so no locking is attempted here.

use thiserror::Error;
use tracing::{debug, warn};

use bizinvoice_core::InvoiceId;
use bizinvoice_invoicing::InvoiceRecord;

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "bizinvoice_invoices";

/// Persisted invoice data could not be read.
#[derive(Debug, Error)]
pub enum PersistenceReadError {
    #[error("persisted invoices are inaccessible: {0}")]
    Inaccessible(#[source] StorageError),

    #[error("persisted invoices are malformed: {0}")]
    Malformed(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Read(#[from] PersistenceReadError),

    #[error("failed to serialize invoices: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write invoices: {0}")]
    Write(#[source] StorageError),
}

/// The invoice list, persisted under one key of a [`KeyValueStorage`].
#[derive(Debug)]
pub struct InvoiceStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> InvoiceStore<S> {
    /// Store under [`DEFAULT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted list, surfacing read failures.
    ///
    /// Nothing stored yet is an empty list, not an error.
    pub fn try_load(&self) -> Result<Vec<InvoiceRecord>, PersistenceReadError> {
        let raw = self
            .storage
            .get_item(&self.key)
            .map_err(PersistenceReadError::Inaccessible)?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(PersistenceReadError::Malformed),
        }
    }

    /// Read the persisted list; on any read failure log it and return an
    /// empty list.
    pub fn load(&self) -> Vec<InvoiceRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(err) => {
                warn!(key = %self.key, error = %err, "error loading invoices; treating store as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted list with `records`.
    pub fn save(&self, records: &[InvoiceRecord]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(records).map_err(StoreError::Serialize)?;
        self.storage
            .set_item(&self.key, &payload)
            .map_err(StoreError::Write)?;
        debug!(key = %self.key, count = records.len(), "saved invoices");
        Ok(())
    }

    /// Append one record at the end (newest last).
    pub fn append(&self, record: InvoiceRecord) -> Result<(), StoreError> {
        let mut records = self.load();
        records.push(record);
        self.save(&records)
    }

    /// Remove every record with `id`, keeping the rest in order.
    ///
    /// Returns whether anything was removed. A missing id is not an error.
    pub fn remove(&self, id: &InvoiceId) -> Result<bool, StoreError> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|r| r.invoice_id() != id);
        let removed = records.len() != before;
        self.save(&records)?;
        Ok(removed)
    }
}
