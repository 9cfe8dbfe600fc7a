//! `bizinvoice-web`
//!
//! **Responsibility:** presentation of the invoice log.
//!
//! This crate provides:
//! - Currency/date formatting and HTML escaping
//! - Render models for the invoice table and dashboard cards
//! - Application configuration (storage key, currency)
//! - The Leptos browser frontend (wasm32 only), persisting to `localStorage`

pub mod config;
pub mod format;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{AppConfig, SETTINGS_KEY};
pub use format::{CurrencyFormat, escape_html, format_date, format_date_in};
pub use view::{DashboardView, InvoiceRow, InvoiceTable};
