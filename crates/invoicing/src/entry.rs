//! Invoice entry: raw form input, validation, and the live total preview.

use serde::{Deserialize, Serialize};

use bizinvoice_core::{DomainError, DomainResult, ValueObject};

/// Raw invoice form input, exactly as typed by the user.
///
/// Nothing here is trusted; [`InvoiceDraft::validate`] is the only way to turn
/// a draft into a [`LineItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub customer_name: String,
    pub product_service: String,
    pub quantity: String,
    pub price: String,
}

impl InvoiceDraft {
    pub fn new(
        customer_name: impl Into<String>,
        product_service: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            product_service: product_service.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Validate the draft.
    ///
    /// Rules are checked in a fixed order (names, quantity, price) and the first
    /// failure is reported. No partial result is produced.
    pub fn validate(&self) -> DomainResult<LineItem> {
        let customer_name = require_text("customer name", &self.customer_name)?;
        let product_service = require_text("product/service", &self.product_service)?;

        let quantity = parse_number("quantity", &self.quantity)?;
        check_quantity(quantity)?;

        let price = parse_number("price", &self.price)?;
        check_price(price)?;
        check_total(quantity, price)?;

        Ok(LineItem {
            customer_name,
            product_service,
            quantity,
            price,
        })
    }

    /// Live total for the current (possibly incomplete) quantity and price.
    pub fn preview_total(&self) -> f64 {
        preview_total(&self.quantity, &self.price)
    }
}

/// A validated invoice line item.
///
/// Invariants: names are trimmed and non-empty, `quantity >= 1`, `price >= 0`,
/// both finite, and `quantity * price` finite.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    customer_name: String,
    product_service: String,
    quantity: f64,
    price: f64,
}

impl ValueObject for LineItem {}

impl LineItem {
    /// Build a line item from already-typed values, enforcing the same rules as
    /// [`InvoiceDraft::validate`].
    pub fn new(
        customer_name: &str,
        product_service: &str,
        quantity: f64,
        price: f64,
    ) -> DomainResult<Self> {
        let customer_name = require_text("customer name", customer_name)?;
        let product_service = require_text("product/service", product_service)?;
        if !quantity.is_finite() {
            return Err(DomainError::validation("quantity must be a number"));
        }
        check_quantity(quantity)?;
        if !price.is_finite() {
            return Err(DomainError::validation("price must be a number"));
        }
        check_price(price)?;
        check_total(quantity, price)?;

        Ok(Self {
            customer_name,
            product_service,
            quantity,
            price,
        })
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
        self.quantity * self.price
    }
}

/// `quantity * price` for display while the form is being edited.
///
/// Blank or non-numeric input counts as 0. Never fails.
pub fn preview_total(quantity: &str, price: &str) -> f64 {
    lenient_number(quantity) * lenient_number(price)
}

fn lenient_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn require_text(field: &str, raw: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn parse_number(field: &str, raw: &str) -> DomainResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(DomainError::validation(format!("{field} must be a number"))),
    }
}

fn check_quantity(quantity: f64) -> DomainResult<()> {
    if quantity < 1.0 {
        return Err(DomainError::validation("quantity must be at least 1"));
    }
    Ok(())
}

fn check_price(price: f64) -> DomainResult<()> {
    if price < 0.0 {
        return Err(DomainError::validation("price cannot be negative"));
    }
    Ok(())
}

fn check_total(quantity: f64, price: f64) -> DomainResult<()> {
    // A non-finite total cannot be written as a JSON number.
    if !(quantity * price).is_finite() {
        return Err(DomainError::validation("total is too large"));
    }
    Ok(())
}
