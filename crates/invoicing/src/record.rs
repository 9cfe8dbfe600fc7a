use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bizinvoice_core::{Entity, InvoiceId};

use crate::entry::LineItem;

/// One persisted invoice (a single line-item sale).
///
/// Records are never edited after issuing. `total` is fixed at issue time and
/// is read back as stored, not recomputed.
///
/// Wire shape (JSON, camelCase keys):
/// `id, date, customerName, productService, quantity, price, total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    id: InvoiceId,
    date: DateTime<Utc>,
    customer_name: String,
    product_service: String,
    quantity: f64,
    price: f64,
    total: f64,
}

impl InvoiceRecord {
    /// Issue a new record from a validated line item.
    pub fn issue(id: InvoiceId, item: LineItem, issued_at: DateTime<Utc>) -> Self {
        let total = item.total();
        Self {
            id,
            date: issued_at,
            customer_name: item.customer_name().to_string(),
            product_service: item.product_service().to_string(),
            quantity: item.quantity(),
            price: item.price(),
            total,
        }
    }

    pub fn invoice_id(&self) -> &InvoiceId {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn product_service(&self) -> &str {
        &self.product_service
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Entity for InvoiceRecord {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    fn acme_widget() -> InvoiceRecord {
        let item = LineItem::new("Acme", "Widget", 3.0, 10.0).unwrap();
        InvoiceRecord::issue("inv-1".parse().unwrap(), item, test_time())
    }

    #[test]
    fn issue_computes_total_from_line_item() {
        let record = acme_widget();
        assert_eq!(record.invoice_id().as_str(), "inv-1");
        assert_eq!(record.date(), test_time());
        assert_eq!(record.customer_name(), "Acme");
        assert_eq!(record.product_service(), "Widget");
        assert_eq!(record.quantity(), 3.0);
        assert_eq!(record.price(), 10.0);
        assert_eq!(record.total(), 30.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(acme_widget()).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["customerName", "date", "id", "price", "productService", "quantity", "total"]
        );
        assert_eq!(obj["id"], "inv-1");
        assert_eq!(obj["customerName"], "Acme");
        assert_eq!(obj["date"], "2026-10-18T09:30:00Z");
    }

    #[test]
    fn loads_records_written_by_the_browser_client() {
        let json = r#"{
            "id": "1760779800000",
            "date": "2026-10-18T09:30:00.000Z",
            "customerName": "Acme",
            "productService": "Widget",
            "quantity": 3,
            "price": 10,
            "total": 30
        }"#;

        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.invoice_id().as_str(), "1760779800000");
        assert_eq!(record.date(), test_time());
        assert_eq!(record.total(), 30.0);
    }

    #[test]
    fn stored_total_is_not_recomputed() {
        let json = r#"{"id":"x","date":"2026-10-18T09:30:00Z","customerName":"A",
            "productService":"B","quantity":2,"price":5,"total":11}"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total(), 11.0);
    }

    #[test]
    fn entity_id_matches_typed_id() {
        let record = acme_widget();
        assert_eq!(Entity::id(&record), record.invoice_id());
    }
}
