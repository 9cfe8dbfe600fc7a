//! Invoice entry workflow: validate → append → refresh.
//!
//! `InvoiceLog` owns the store and the list of collaborators that must be told
//! when the invoice list changed. Everything is injected; nothing is global.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

use bizinvoice_core::{DomainError, InvoiceId};
use bizinvoice_invoicing::{DashboardSummary, InvoiceDraft, InvoiceRecord};

use crate::storage::KeyValueStorage;
use crate::store::{InvoiceStore, StoreError};

/// A collaborator that redraws from the current list and dashboard figures.
///
/// Records arrive in storage order (oldest first); reversing for display is
/// the hook's job.
pub trait RefreshHook {
    fn refresh(&self, records: &[InvoiceRecord], summary: &DashboardSummary);
}

impl<F> RefreshHook for F
where
    F: Fn(&[InvoiceRecord], &DashboardSummary),
{
    fn refresh(&self, records: &[InvoiceRecord], summary: &DashboardSummary) {
        self(records, summary)
    }
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Form input was rejected; the store was not touched.
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WorkflowError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::Validation(err) => match err.validation_message() {
                Some(msg) => format!("Please fill in all fields with valid values: {msg}."),
                None => err.to_string(),
            },
            WorkflowError::Store(err) => format!("Could not save invoices: {err}"),
        }
    }
}

/// The invoice log service.
pub struct InvoiceLog<S> {
    store: InvoiceStore<S>,
    hooks: Vec<Box<dyn RefreshHook>>,
}

impl<S> core::fmt::Debug for InvoiceLog<S>
where
    S: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InvoiceLog")
            .field("store", &self.store)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl<S: KeyValueStorage> InvoiceLog<S> {
    pub fn new(store: InvoiceStore<S>) -> Self {
        Self {
            store,
            hooks: Vec::new(),
        }
    }

    /// Register a collaborator to be refreshed after every change.
    pub fn with_hook(mut self, hook: impl RefreshHook + 'static) -> Self {
        self.add_hook(hook);
        self
    }

    pub fn add_hook(&mut self, hook: impl RefreshHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn store(&self) -> &InvoiceStore<S> {
        &self.store
    }

    /// Current records, oldest first.
    pub fn records(&self) -> Vec<InvoiceRecord> {
        self.store.load()
    }

    /// Dashboard figures for the current records against the local clock.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_records(&self.store.load())
    }

    /// Validate `draft`, append the resulting record, then refresh.
    pub fn submit(&self, draft: &InvoiceDraft) -> Result<InvoiceRecord, WorkflowError> {
        self.submit_at(draft, Utc::now())
    }

    /// As [`InvoiceLog::submit`], issuing the record at `now`.
    pub fn submit_at(
        &self,
        draft: &InvoiceDraft,
        now: DateTime<Utc>,
    ) -> Result<InvoiceRecord, WorkflowError> {
        let item = draft.validate().inspect_err(|err| {
            debug!(error = %err, "invoice draft rejected");
        })?;

        let record = InvoiceRecord::issue(InvoiceId::new(), item, now);
        self.store.append(record.clone())?;
        info!(
            invoice_id = %record.invoice_id(),
            total = record.total(),
            "invoice added"
        );

        self.refresh();
        Ok(record)
    }

    /// Delete the record with `id` (a missing id is a no-op), then refresh.
    ///
    /// Returns whether a record was removed.
    pub fn delete(&self, id: &InvoiceId) -> Result<bool, WorkflowError> {
        let removed = self.store.remove(id)?;
        if removed {
            info!(invoice_id = %id, "invoice deleted");
        } else {
            debug!(invoice_id = %id, "delete requested for unknown invoice");
        }

        self.refresh();
        Ok(removed)
    }

    /// Recompute records and dashboard figures and push them to every hook.
    pub fn refresh(&self) {
        let records = self.store.load();
        let summary = DashboardSummary::from_records(&records);
        for hook in &self.hooks {
            hook.refresh(&records, &summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::storage::InMemoryStorage;

    fn counting_log() -> (InvoiceLog<InMemoryStorage>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let log = InvoiceLog::new(InvoiceStore::new(InMemoryStorage::new())).with_hook(
            move |_: &[InvoiceRecord], _: &DashboardSummary| seen.set(seen.get() + 1),
        );
        (log, calls)
    }

    #[test]
    fn rejected_draft_does_not_refresh() {
        let (log, calls) = counting_log();
        let err = log
            .submit(&InvoiceDraft::new("", "Widget", "1", "1"))
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Validation(_)));
        assert_eq!(calls.get(), 0);
        assert!(log.store().storage().get_item(log.store().key()).unwrap().is_none());
    }

    #[test]
    fn accepted_draft_refreshes_once() {
        let (log, calls) = counting_log();
        log.submit(&InvoiceDraft::new("Acme", "Widget", "3", "10")).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn delete_refreshes_even_for_unknown_ids() {
        let (log, calls) = counting_log();
        let removed = log.delete(&"nope".parse().unwrap()).unwrap();
        assert!(!removed);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn validation_user_message_is_descriptive() {
        let err = WorkflowError::from(DomainError::validation("quantity must be at least 1"));
        assert_eq!(
            err.user_message(),
            "Please fill in all fields with valid values: quantity must be at least 1."
        );
    }
}
