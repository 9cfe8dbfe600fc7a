//! Render models: what the invoice table and dashboard cards show.
//!
//! These are plain data built from the store's read API. Text fields hold the
//! raw user text; [`InvoiceTable::to_html`] escapes it for string rendering,
//! and DOM renderers escape by inserting it as text nodes.

use chrono::{Local, TimeZone};
use serde::Serialize;

use bizinvoice_core::InvoiceId;
use bizinvoice_invoicing::{DashboardSummary, InvoiceRecord};

use crate::format::{CurrencyFormat, escape_html, format_date_in};

/// One displayed table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    /// 1-based; the newest invoice has the highest number.
    pub index: usize,
    pub id: InvoiceId,
    pub date: String,
    pub customer_name: String,
    pub product_service: String,
    pub quantity: String,
    pub price: String,
    pub total: String,
}

/// The invoice table, newest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InvoiceTable {
    pub rows: Vec<InvoiceRow>,
}

impl InvoiceTable {
    /// Build rows from records in storage order (oldest first), dates in the
    /// local time zone.
    pub fn build(records: &[InvoiceRecord], currency: &CurrencyFormat) -> Self {
        Self::build_in(records, currency, &Local)
    }

    pub fn build_in<Tz>(records: &[InvoiceRecord], currency: &CurrencyFormat, zone: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        let count = records.len();
        let rows = records
            .iter()
            .rev()
            .enumerate()
            .map(|(position, record)| InvoiceRow {
                index: count - position,
                id: record.invoice_id().clone(),
                date: format_date_in(record.date(), zone),
                customer_name: record.customer_name().to_string(),
                product_service: record.product_service().to_string(),
                quantity: record.quantity().to_string(),
                price: currency.format(record.price()),
                total: currency.format(record.total()),
            })
            .collect();
        Self { rows }
    }

    /// Whether the empty-state message should be shown instead.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `<tr>` markup for every row, user text escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for row in &self.rows {
            html.push_str(&format!(
                concat!(
                    "<tr>",
                    "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
                    "<td class=\"total-cell\">{}</td>",
                    "<td><button type=\"button\" class=\"btn btn-danger\" data-id=\"{}\">Delete</button></td>",
                    "</tr>"
                ),
                row.index,
                escape_html(&row.date),
                escape_html(&row.customer_name),
                escape_html(&row.product_service),
                escape_html(&row.quantity),
                escape_html(&row.price),
                escape_html(&row.total),
                escape_html(row.id.as_str()),
            ));
        }
        html
    }
}

/// Formatted dashboard figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub total_revenue: String,
    pub invoice_count: String,
    pub today_sales: String,
    pub average_invoice: String,
}

impl DashboardView {
    pub fn build(summary: &DashboardSummary, currency: &CurrencyFormat) -> Self {
        Self {
            total_revenue: currency.format(summary.total_revenue),
            invoice_count: summary.invoice_count.to_string(),
            today_sales: currency.format(summary.today_sales),
            average_invoice: currency.format(summary.average_invoice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizinvoice_invoicing::LineItem;
    use chrono::{DateTime, Utc};

    fn test_time(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, day, 9, 30, 0).unwrap()
    }

    fn record(id: &str, customer: &str, quantity: f64, price: f64, day: u32) -> InvoiceRecord {
        let item = LineItem::new(customer, "Widget", quantity, price).unwrap();
        InvoiceRecord::issue(id.parse().unwrap(), item, test_time(day))
    }

    #[test]
    fn rows_are_newest_first_with_descending_index() {
        let records = vec![
            record("a", "Oldest", 1.0, 10.0, 16),
            record("b", "Middle", 2.0, 10.0, 17),
            record("c", "Newest", 3.0, 10.0, 18),
        ];

        let table = InvoiceTable::build_in(&records, &CurrencyFormat::usd(), &Utc);
        let summary: Vec<(usize, &str, &str)> = table
            .rows
            .iter()
            .map(|r| (r.index, r.id.as_str(), r.customer_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(3, "c", "Newest"), (2, "b", "Middle"), (1, "a", "Oldest")]
        );
    }

    #[test]
    fn rows_are_formatted_for_display() {
        let records = vec![record("a", "Acme", 2.5, 1200.0, 18)];
        let table = InvoiceTable::build_in(&records, &CurrencyFormat::usd(), &Utc);

        let row = &table.rows[0];
        assert_eq!(row.date, "Oct 18, 2026");
        assert_eq!(row.quantity, "2.5");
        assert_eq!(row.price, "$1,200.00");
        assert_eq!(row.total, "$3,000.00");
    }

    #[test]
    fn empty_table() {
        let table = InvoiceTable::build(&[], &CurrencyFormat::usd());
        assert!(table.is_empty());
        assert_eq!(table.to_html(), "");
    }

    #[test]
    fn html_escapes_user_text() {
        let records = vec![record("a", "<b>Evil</b> & Co", 1.0, 1.0, 18)];
        let html = InvoiceTable::build_in(&records, &CurrencyFormat::usd(), &Utc).to_html();

        assert!(html.contains("&lt;b&gt;Evil&lt;/b&gt; &amp; Co"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("data-id=\"a\""));
        assert!(html.starts_with("<tr><td>1</td><td>Oct 18, 2026</td>"));
    }

    #[test]
    fn dashboard_view_formats_figures() {
        let summary = DashboardSummary {
            total_revenue: 100.0,
            invoice_count: 2,
            today_sales: 30.0,
            average_invoice: 50.0,
        };

        let php = DashboardView::build(&summary, &CurrencyFormat::php());
        assert_eq!(php.total_revenue, "\u{20B1}100.00");
        assert_eq!(php.invoice_count, "2");
        assert_eq!(php.today_sales, "\u{20B1}30.00");
        assert_eq!(php.average_invoice, "\u{20B1}50.00");
    }
}
