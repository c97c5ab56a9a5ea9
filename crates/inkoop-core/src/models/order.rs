//! Purchase order data models.
//!
//! All entities are value objects owned by the pipeline invocation that
//! created them. Every scalar on [`ExtractedOrder`] is an explicit `Option`
//! so that "absent" stays distinguishable from "present but empty".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A structured purchase order extracted from raw document text.
///
/// Constructed empty, populated by the field extractor, and backfilled by the
/// totals reconciler. Validation and scoring read it without mutating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedOrder {
    /// Order identifier (e.g. "APO-00199").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// Order date, kept verbatim as it appeared in the source text.
    /// Day-first vs month-first is ambiguous in some source formats, so no
    /// calendar normalization is attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Supplier name, trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    /// Line items in order of appearance in the text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,

    /// Net amount before VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,

    /// VAT rate as a fraction (0.21 for 21%).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<Decimal>,

    /// VAT amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Decimal>,

    /// Gross total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,

    /// Delivery address block, when the document carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<DeliveryAddress>,
}

impl ExtractedOrder {
    /// Create a new empty order with all fields absent.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A single line item on the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product/service description, trimmed and non-empty.
    pub product: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Line total. Expected to be quantity x unit price, but individual
    /// lines are taken as written; only the aggregate subtotal is reconciled.
    pub total: Decimal,
}

/// Delivery address as a company/address pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// Receiving company name.
    pub company: String,

    /// Remaining address lines, joined with ", ".
    pub address: String,
}

/// Presence and consistency report for an extracted order.
///
/// Derived from an [`ExtractedOrder`] on demand; never stored as ground
/// truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// An order number was found.
    pub has_order_number: bool,

    /// A date was found.
    pub has_date: bool,

    /// A supplier was found.
    pub has_supplier: bool,

    /// At least one line item was found.
    pub has_items: bool,

    /// Subtotal + VAT amount equals the total within 0.01.
    pub totals_match: bool,
}
