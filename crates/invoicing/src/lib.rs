//! Invoicing domain module.
//!
//! This crate contains the business rules of the invoice log (line-item
//! validation, record issuing, dashboard aggregation), implemented purely as
//! deterministic domain logic (no IO, no storage, no UI).

pub mod dashboard;
pub mod entry;
pub mod record;

pub use dashboard::DashboardSummary;
pub use entry::{InvoiceDraft, LineItem, preview_total};
pub use record::InvoiceRecord;
