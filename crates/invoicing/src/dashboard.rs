//! Dashboard aggregation over the invoice list.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::record::InvoiceRecord;

/// Summary figures shown on the dashboard.
///
/// Always derived from the full record list; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub invoice_count: usize,
    pub today_sales: f64,
    pub average_invoice: f64,
}

impl DashboardSummary {
    /// Summarize `records` against the local clock.
    pub fn from_records(records: &[InvoiceRecord]) -> Self {
        Self::at(records, Local::now())
    }

    /// Summarize `records` as seen at `now`.
    ///
    /// "Today" is the calendar day of `now` in its own time zone; each record's
    /// date is converted into that zone before comparing year/month/day.
    pub fn at<Tz: TimeZone>(records: &[InvoiceRecord], now: DateTime<Tz>) -> Self {
        let zone = now.timezone();
        let today = now.date_naive();

        let mut total_revenue = 0.0;
        let mut today_sales = 0.0;
        for record in records {
            total_revenue += record.total();
            if record.date().with_timezone(&zone).date_naive() == today {
                today_sales += record.total();
            }
        }

        let invoice_count = records.len();
        let average_invoice = if invoice_count > 0 {
            total_revenue / invoice_count as f64
        } else {
            0.0
        };

        Self {
            total_revenue,
            invoice_count,
            today_sales,
            average_invoice,
        }
    }
}
